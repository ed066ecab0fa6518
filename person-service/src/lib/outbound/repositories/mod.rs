pub mod memory;
pub mod postgres;

pub use memory::MemoryPersonRepository;
pub use postgres::PostgresPersonRepository;
