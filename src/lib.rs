//! Game logic for the chameleon Discord bot.

pub mod games;
