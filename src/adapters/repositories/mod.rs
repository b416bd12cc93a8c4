mod pg_file_repository;

pub use pg_file_repository::PgFileRepository;
