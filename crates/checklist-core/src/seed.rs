//! Built-in Seed Data
//!
//! The category taxonomy and the default twenty-item checklist.

use crate::models::{Category, ChecklistItem};

/// Title used when nothing is stored
pub const DEFAULT_TITLE: &str = "Чек-лист проекта";

/// Categories in declared (display and export) order
pub const CATEGORIES: &[Category] = &[
    Category { id: "setup", label: "Настройка", icon: "Settings", color: "blue" },
    Category { id: "development", label: "Разработка", icon: "Code", color: "purple" },
    Category { id: "testing", label: "Тестирование", icon: "TestTube", color: "green" },
    Category { id: "deployment", label: "Деплой", icon: "Rocket", color: "orange" },
    Category { id: "documentation", label: "Документация", icon: "FileText", color: "cyan" },
    Category { id: "optimization", label: "Оптимизация", icon: "Zap", color: "yellow" },
];

/// (id, title, description, category)
const SEED: &[(&str, &str, &str, &str)] = &[
    ("1", "Инициализировать репозиторий", "Создать Git-репозиторий и настроить .gitignore", "setup"),
    ("2", "Настроить окружение", "Установить зависимости и настроить переменные окружения", "setup"),
    ("3", "Настроить линтеры", "Подключить ESLint и Prettier, договориться о стиле кода", "setup"),
    ("4", "Настроить CI", "Добавить автоматическую сборку и проверки для каждого коммита", "setup"),
    ("5", "Спроектировать архитектуру", "Описать модули, их границы и взаимодействие", "development"),
    ("6", "Реализовать основной функционал", "Написать ключевые сценарии приложения", "development"),
    ("7", "Сверстать интерфейс", "Реализовать адаптивные страницы по макетам", "development"),
    ("8", "Подключить API", "Интегрировать внешние сервисы и обработать ошибки", "development"),
    ("9", "Написать unit-тесты", "Покрыть тестами бизнес-логику и утилиты", "testing"),
    ("10", "Провести интеграционное тестирование", "Проверить взаимодействие модулей между собой", "testing"),
    ("11", "Проверить кроссбраузерность", "Протестировать работу в основных браузерах и на мобильных", "testing"),
    ("12", "Подготовить production-сборку", "Собрать оптимизированную версию приложения", "deployment"),
    ("13", "Настроить хостинг", "Выбрать платформу, подключить домен и SSL", "deployment"),
    ("14", "Настроить мониторинг", "Подключить логирование ошибок и отслеживание аптайма", "deployment"),
    ("15", "Написать README", "Описать установку, запуск и структуру проекта", "documentation"),
    ("16", "Задокументировать API", "Описать эндпоинты, параметры и примеры ответов", "documentation"),
    ("17", "Составить руководство пользователя", "Подготовить инструкции для конечных пользователей", "documentation"),
    ("18", "Оптимизировать загрузку", "Настроить code splitting и ленивую загрузку", "optimization"),
    ("19", "Оптимизировать изображения", "Сжать изображения и перейти на современные форматы", "optimization"),
    ("20", "Провести аудит производительности", "Проверить метрики Lighthouse и устранить узкие места", "optimization"),
];

/// Fresh copy of the default item set, all unchecked
pub fn default_items() -> Vec<ChecklistItem> {
    SEED.iter()
        .map(|(id, title, description, category)| ChecklistItem::new(id, title, description, category))
        .collect()
}

/// Look up a category by identifier
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
