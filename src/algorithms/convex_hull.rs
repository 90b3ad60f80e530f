pub mod divide_and_conquer;
pub mod gift_wrapping;
