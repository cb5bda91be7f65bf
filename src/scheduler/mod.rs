//! Cron jobs that run alongside the bot.

pub mod keepalive;
