//! steambb-core: Document tree shared by the markdown reader and the BBCode writer.
//!
//! The tree follows the mdast shape: every node is identified by a `type`
//! name, and the small set of node types the BBCode writer knows about are
//! modelled as dedicated variants. Anything else travels as [`Node::Other`].

pub mod builder;
mod error;
mod fidelity;
mod node;
mod options;
#[cfg(feature = "serde")]
mod codec;

pub use error::*;
pub use fidelity::*;
pub use node::*;
pub use options::*;
#[cfg(feature = "serde")]
pub use codec::TreeError;
