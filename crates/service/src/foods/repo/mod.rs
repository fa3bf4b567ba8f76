pub mod seaorm;

pub use seaorm::SeaOrmFoodRepository;
