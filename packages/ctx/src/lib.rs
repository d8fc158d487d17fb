#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]
#![warn(missing_docs)]

mod channel;

mod ctx;
pub use ctx::*;

mod error;
pub use error::*;

mod inject;
pub use inject::*;

mod provider;
pub use provider::*;

pub mod prelude {
    //! Everything needed to create, provide and read contexts.
    pub use crate::{Ctx, CtxProvider, InjectProps, IntoRenderChild, MissingProviderError, RenderChild};
}
