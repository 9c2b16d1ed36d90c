mod partners;
pub use partners::Partners;
