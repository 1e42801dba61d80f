mod guild_event;
mod guild_settings;
