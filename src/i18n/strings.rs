//! Built-in translation tables.
//!
//! Tables are flat `(key, text)` slices registered into a
//! [`TranslationCatalog`](crate::i18n::TranslationCatalog) at startup. Core UI
//! strings use SCREAMING_CASE keys; plugin strings use their English text as
//! the key, so an untranslated plugin string still reads correctly.

/// A built-in table of `(key, text)` pairs.
pub type StringTable = &'static [(&'static str, &'static str)];

// ==================== Core UI Strings ====================

/// English text for the core UI keys.
pub const EN_US_CORE_STRINGS: StringTable = &[
    ("VENCORD_SETTINGS", "Vencord Settings"),
    ("VENCORD_PLUGINS", "Vencord Plugins"),
    ("VENCORD_THEMES", "Vencord Themes"),
    ("VENCORD_CLOUD", "Vencord Cloud"),
    ("VENCORD_UPDATER", "Vencord Updater"),
    ("VENCORD_LANGUAGE", "Vencord Language"),
    ("SETTINGS_SAVED", "Settings saved"),
    ("SETTINGS_RESET", "Settings reset"),
    ("SETTINGS_CLOUD_SYNC", "Settings Cloud Sync"),
    ("SETTINGS_CLOUD_SYNC_DESC", "Synchronize your settings across devices"),
    ("PLUGINS_INSTALLED", "Installed plugins"),
    ("PLUGINS_ENABLED", "Enabled"),
    ("PLUGINS_DISABLED", "Disabled"),
    ("PLUGINS_SEARCH", "Search for a plugin..."),
    ("PLUGINS_SETTINGS", "Plugin settings"),
    ("UPDATE_AVAILABLE", "Update available!"),
    ("UPDATE_COMPLETE", "Update complete!"),
    ("UPDATE_RESTART", "Click here to restart"),
    ("UPDATE_CHECK", "Check for updates"),
    ("UPDATE_CHECKING", "Checking for updates..."),
    ("UPDATE_DOWNLOADING", "Downloading update..."),
    ("UPDATE_ERROR", "Update failed"),
    (
        "LANGUAGE_SETTINGS_DESC",
        "Choose the language of the Vencord interface. Changes take effect after a reload.",
    ),
    ("LANGUAGE_SELECTION", "Language selection"),
    ("LANGUAGE_RESTART_DESC", "A page reload is required to apply the change."),
    ("LANGUAGE_CONTRIBUTION", "Help translate"),
    (
        "LANGUAGE_CONTRIBUTION_DESC",
        "You can help translate Vencord into other languages. Visit our GitHub repository for more information.",
    ),
];

/// Russian text for the core UI keys.
pub const RU_CORE_STRINGS: StringTable = &[
    ("VENCORD_SETTINGS", "Настройки Vencord"),
    ("VENCORD_PLUGINS", "Плагины Vencord"),
    ("VENCORD_THEMES", "Темы Vencord"),
    ("VENCORD_CLOUD", "Облако Vencord"),
    ("VENCORD_UPDATER", "Обновление Vencord"),
    ("VENCORD_LANGUAGE", "Язык Vencord"),
    ("SETTINGS_SAVED", "Настройки сохранены"),
    ("SETTINGS_RESET", "Настройки сброшены"),
    ("SETTINGS_CLOUD_SYNC", "Синхронизация настроек в облаке"),
    ("SETTINGS_CLOUD_SYNC_DESC", "Синхронизируйте ваши настройки между устройствами"),
    ("PLUGINS_INSTALLED", "Установленные плагины"),
    ("PLUGINS_ENABLED", "Включено"),
    ("PLUGINS_DISABLED", "Отключено"),
    ("PLUGINS_SEARCH", "Поиск плагинов..."),
    ("PLUGINS_SETTINGS", "Настройки плагина"),
    ("UPDATE_AVAILABLE", "Доступно обновление!"),
    ("UPDATE_COMPLETE", "Обновление завершено!"),
    ("UPDATE_RESTART", "Нажмите здесь, чтобы перезапустить"),
    ("UPDATE_CHECK", "Проверить обновления"),
    ("UPDATE_CHECKING", "Проверка обновлений..."),
    ("UPDATE_DOWNLOADING", "Загрузка обновления..."),
    ("UPDATE_ERROR", "Ошибка обновления"),
    (
        "LANGUAGE_SETTINGS_DESC",
        "Выберите язык интерфейса Vencord. Изменения вступят в силу после перезагрузки.",
    ),
    ("LANGUAGE_SELECTION", "Выбор языка"),
    ("LANGUAGE_RESTART_DESC", "Для применения изменений требуется перезагрузка страницы."),
    ("LANGUAGE_CONTRIBUTION", "Помощь с переводом"),
    (
        "LANGUAGE_CONTRIBUTION_DESC",
        "Вы можете помочь с переводом Vencord на другие языки. Посетите наш GitHub репозиторий для получения дополнительной информации.",
    ),
];

// ==================== Plugin Strings ====================

/// Russian text for plugin settings and labels, keyed by the English text.
pub const RU_PLUGIN_STRINGS: StringTable = &[
    // translate
    ("Translate", "Перевод"),
    ("Translate messages with Google Translate or DeepL", "Переводите сообщения с помощью Google Translate или DeepL"),
    ("Language that received messages should be translated from", "Язык, с которого следует переводить полученные сообщения"),
    ("Language that received messages should be translated to", "Язык, на который следует переводить полученные сообщения"),
    ("Language that your own messages should be translated from", "Язык, с которого следует переводить ваши собственные сообщения"),
    ("Language that your own messages should be translated to", "Язык, на который следует переводить ваши собственные сообщения"),
    ("Show translate button in chat bar", "Показывать кнопку перевода в чате"),
    ("Translation service", "Сервис перевода"),
    ("Translation service (Not supported on Web!)", "Сервис перевода (Не поддерживается в веб-версии!)"),
    ("Google Translate", "Google Переводчик"),
    ("DeepL Free", "DeepL Бесплатный"),
    ("DeepL Pro", "DeepL Pro"),
    ("DeepL API key", "API ключ DeepL"),
    ("Get your API key from", "Получите свой API ключ с"),
    ("Automatically translate your messages before sending", "Автоматически переводить ваши сообщения перед отправкой"),
    ("You can also shift/right click the translate button to toggle this", "Вы также можете нажать Shift/правую кнопку мыши на кнопке перевода, чтобы переключить это"),
    ("Show a tooltip on the ChatBar button whenever a message is automatically translated", "Показывать подсказку на кнопке чата при автоматическом переводе сообщения"),
    ("Detect language", "Определить язык"),
    // showHiddenChannels
    ("Show Hidden Channels", "Показать скрытые каналы"),
    ("Shows channels that you don't have access to view", "Показывает каналы, к которым у вас нет доступа"),
    ("Hidden Channels", "Скрытые каналы"),
    ("Visible to everyone", "Видимы всем"),
    ("You can't access this channel.", "Вы не можете получить доступ к этому каналу."),
    // messageLogger
    ("Message Logger", "Журнал сообщений"),
    ("Logs deleted and edited messages", "Сохраняет удаленные и отредактированные сообщения"),
    ("Deleted Message", "Удаленное сообщение"),
    ("Edited Message", "Отредактированное сообщение"),
    ("Original Message", "Исходное сообщение"),
    ("Clear Log", "Очистить журнал"),
    ("Open Logs", "Открыть журнал"),
    ("Enable Logging", "Включить журналирование"),
    ("Ghost Pings", "Призрачные упоминания"),
    ("Log deleted messages", "Сохранять удаленные сообщения"),
    ("Log edited messages", "Сохранять отредактированные сообщения"),
    ("Show notification for ghost pings", "Показывать уведомления о призрачных упоминаниях"),
    ("Show notification for edited messages", "Показывать уведомления об отредактированных сообщениях"),
    ("Show notification for deleted messages", "Показывать уведомления об удаленных сообщениях"),
    ("Ignore bots", "Игнорировать ботов"),
    ("Ignore own messages", "Игнорировать собственные сообщения"),
    ("Ignore blocked users", "Игнорировать заблокированных пользователей"),
    // spotifyControls
    ("Spotify Controls", "Управление Spotify"),
    ("Adds a Spotify player in Discord", "Добавляет плеер Spotify в Discord"),
    ("Play", "Воспроизвести"),
    ("Pause", "Пауза"),
    ("Next", "Следующий"),
    ("Previous", "Предыдущий"),
    ("Shuffle", "Перемешать"),
    ("Repeat", "Повторять"),
    ("Connect to Spotify", "Подключиться к Spotify"),
    ("Show controls in the chat bar", "Показывать элементы управления в чате"),
    ("Show controls in the user panel", "Показывать элементы управления в панели пользователя"),
    ("Hide when nothing is playing", "Скрывать, когда ничего не воспроизводится"),
    ("Show album cover", "Показывать обложку альбома"),
    // vcDoubleClick
    ("Double Click to Edit", "Двойной клик для редактирования"),
    ("Allows you to double click a message to edit it", "Позволяет редактировать сообщение двойным кликом"),
    // noReplyMention
    ("No Reply Mention", "Без упоминания при ответе"),
    ("Disables the automatic mention when replying to someone", "Отключает автоматическое упоминание при ответе кому-либо"),
    ("Default to mention off", "По умолчанию без упоминания"),
    ("Default to mention on", "По умолчанию с упоминанием"),
    ("Always mention off", "Всегда без упоминания"),
    ("Always mention on", "Всегда с упоминанием"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys(table: StringTable) -> HashSet<&'static str> {
        table.iter().map(|(key, _)| *key).collect()
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_core_tables_cover_same_keys() {
        assert_eq!(keys(EN_US_CORE_STRINGS), keys(RU_CORE_STRINGS));
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for table in [EN_US_CORE_STRINGS, RU_CORE_STRINGS, RU_PLUGIN_STRINGS] {
            assert_eq!(keys(table).len(), table.len());
        }
    }

    #[test]
    fn test_no_empty_values() {
        for table in [EN_US_CORE_STRINGS, RU_CORE_STRINGS, RU_PLUGIN_STRINGS] {
            for (key, text) in table {
                assert!(!text.is_empty(), "empty text for {key}");
            }
        }
    }

    #[test]
    fn test_plugin_table_size() {
        assert_eq!(RU_PLUGIN_STRINGS.len(), 61);
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_language_tab_strings_present() {
        let ru = keys(RU_CORE_STRINGS);
        for key in [
            "VENCORD_LANGUAGE",
            "LANGUAGE_SETTINGS_DESC",
            "LANGUAGE_SELECTION",
            "LANGUAGE_RESTART_DESC",
            "LANGUAGE_CONTRIBUTION",
            "LANGUAGE_CONTRIBUTION_DESC",
        ] {
            assert!(ru.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_plugin_keys_are_english_text() {
        let plugin = keys(RU_PLUGIN_STRINGS);
        assert!(plugin.contains("Spotify Controls"));
        assert!(plugin.contains("You can't access this channel."));
    }

    #[test]
    fn test_plugin_and_core_keys_do_not_collide() {
        let core = keys(RU_CORE_STRINGS);
        let plugin = keys(RU_PLUGIN_STRINGS);
        assert!(core.is_disjoint(&plugin));
    }
}
