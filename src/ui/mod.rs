/// UI module exports
pub mod banner;

pub use banner::{BannerCommand, EntryPoint, UnitagBanner};
