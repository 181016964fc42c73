mod xray;

pub use xray::{XrayClass, XrayReading};
