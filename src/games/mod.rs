pub mod bowling;
