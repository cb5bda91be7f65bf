mod bot_config;
mod dossier;
mod player;
mod statistic;
mod unit;
