pub mod weatherapi;
