pub mod traits;

pub use traits::{ChartHost, FormDom, IconSet, Notifier};
