pub mod histogram;
pub mod sampler;
pub mod stats;
pub mod sweep;
pub mod util;
