pub mod projections;
