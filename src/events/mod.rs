pub mod hover;
pub mod nav;
pub mod pointer;
pub mod scroll;
