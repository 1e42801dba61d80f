mod guild_settings;
