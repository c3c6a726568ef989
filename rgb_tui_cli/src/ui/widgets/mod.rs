pub mod gradient;
pub mod readout;
pub mod slider;

pub use gradient::GradientWidget;
pub use readout::ReadoutWidget;
pub use slider::SliderWidget;
