pub mod adc;
pub mod pins;
pub mod timer;
pub mod usart;

pub use adc::Adc;
pub use pins::BoardPins;
pub use timer::{DualPwm, Tick};
pub use usart::Usart;
