mod relay;

pub use relay::FarcasterRelay;
