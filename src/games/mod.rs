pub mod chameleon;
