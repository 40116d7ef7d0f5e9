pub mod overrides;
pub mod session;

pub use overrides::RenderOverrides;
pub use session::DuotoneSession;
