pub mod error;
pub mod stream;
pub mod stream_configuration;

pub use error::{StreamError, StreamResult};
pub use stream::{Stream, StreamExt};
pub use stream_configuration::FileConfig;

/// Everything needed to build and drive a pipeline.
pub mod prelude {
    pub use crate::error::{StreamError, StreamResult};
    pub use crate::stream::{
        AdvancedStreamExt, CycleStreamExt, DoubleEndedStream, IntoStdExt, SelectStreamExt, Stream, StreamExt,
        UtilityStreamExt,
    };
    pub use crate::stream_configuration::FileConfig;
}
