//! The chunk-processing engine: segmentation of a label sequence into known
//! chunks, compression of the working buffer onto that segmentation, creation
//! of new chunks from adjacent ready pairs, and the speed-adjustment rule.

pub mod chunking;
pub mod recoding;
pub mod segmentation;
pub mod speed;

pub use chunking::learn_chunks;
pub use recoding::compress;
pub use segmentation::find_chunks;
pub use speed::{adjust_pt, pt_sigmoid};
