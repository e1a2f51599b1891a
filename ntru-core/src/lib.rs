pub mod bigdec_poly;
pub mod bigint_poly;
pub mod encode;
pub mod euclid;
pub mod integer_poly;
pub mod resultant;
pub mod ternary;
