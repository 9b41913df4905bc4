use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstoqueError {
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    #[error(
        "Insufficient stock for product {id}: {available} available, {requested} requested"
    )]
    InsufficientStock {
        id: u64,
        available: u64,
        requested: u64,
    },

    #[error("Stock movement would overflow the quantity of product {id}")]
    StockOverflow { id: u64 },

    #[error("No product ids left to assign")]
    IdsExhausted,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EstoqueError>;
