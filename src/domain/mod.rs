// Domain layer: storefront models, pure rules and ports. No HTTP or filesystem access here.

pub mod catalog;
pub mod device;
pub mod model;
pub mod ports;
pub mod pricing;
