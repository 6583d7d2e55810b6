pub mod motion;
pub mod scatter;
pub mod snow;
pub mod tree;
