//! Documentation Content
//!
//! The fixed content tree rendered by the docs viewer, in display order.

/// Docs section identifier, also used as the in-page anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Introduction,
    Installation,
    Examples,
    Api,
    Faq,
    Support,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Introduction,
        SectionId::Installation,
        SectionId::Examples,
        SectionId::Api,
        SectionId::Faq,
        SectionId::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Introduction => "introduction",
            SectionId::Installation => "installation",
            SectionId::Examples => "examples",
            SectionId::Api => "api",
            SectionId::Faq => "faq",
            SectionId::Support => "support",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Sidebar menu label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Introduction => "Введение",
            SectionId::Installation => "Установка",
            SectionId::Examples => "Примеры",
            SectionId::Api => "API",
            SectionId::Faq => "FAQ",
            SectionId::Support => "Поддержка",
        }
    }

    /// Sidebar menu icon
    pub fn menu_icon(&self) -> &'static str {
        match self {
            SectionId::Introduction => "Home",
            SectionId::Installation => "Download",
            SectionId::Examples => "Code",
            SectionId::Api => "Book",
            SectionId::Faq => "HelpCircle",
            SectionId::Support => "MessageCircle",
        }
    }
}

pub const PRODUCT_NAME: &str = "DocHub";
pub const VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Outline,
    Destructive,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Secondary => "tone-secondary",
            Tone::Accent => "tone-accent",
            Tone::Outline => "tone-outline",
            Tone::Destructive => "tone-destructive",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub text: &'static str,
    pub tone: Tone,
}

/// Numbered installation step
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    /// Shell or code line shown in a monospace box
    pub code: Option<&'static str>,
    pub text: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct CodeExample {
    pub title: &'static str,
    pub icon: &'static str,
    /// Fenced Markdown; the fence's info string picks the syntax
    pub body: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            HttpMethod::Get => Tone::Secondary,
            HttpMethod::Post => Tone::Primary,
            HttpMethod::Put => Tone::Accent,
            HttpMethod::Delete => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Inline markdown
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum SupportAction {
    Link { href: &'static str, label: &'static str, external: bool },
    Button { label: &'static str, tone: Tone },
}

#[derive(Debug, Clone, Copy)]
pub struct SupportCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub text: &'static str,
    pub action: SupportAction,
}

/// Section body building blocks
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Inline markdown paragraph
    Paragraph(&'static str),
    Badges(&'static [Badge]),
    Steps(&'static [Step]),
    CodeExamples(&'static [CodeExample]),
    Endpoints(&'static [Endpoint]),
    Faq(&'static [FaqEntry]),
    SupportCards(&'static [SupportCard]),
}

#[derive(Debug, Clone, Copy)]
pub struct DocSection {
    pub id: SectionId,
    pub heading: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub blocks: &'static [Block],
}

pub const SECTIONS: &[DocSection] = &[
    DocSection {
        id: SectionId::Introduction,
        heading: "Введение",
        icon: "Rocket",
        tone: Tone::Primary,
        blocks: &[
            Block::Paragraph(
                "Добро пожаловать в нашу документацию! Этот проект создан для упрощения \
                 разработки и предоставления мощных инструментов для ваших задач.",
            ),
            Block::Paragraph(
                "Мы стремимся предоставить простой и понятный интерфейс, который позволит \
                 вам быстро начать работу и достичь результатов. Наша платформа поддерживает \
                 современные стандарты и постоянно обновляется.",
            ),
            Block::Badges(&[
                Badge { text: "React", tone: Tone::Primary },
                Badge { text: "TypeScript", tone: Tone::Secondary },
                Badge { text: "Современный", tone: Tone::Accent },
                Badge { text: "Open Source", tone: Tone::Outline },
            ]),
        ],
    },
    DocSection {
        id: SectionId::Installation,
        heading: "Установка",
        icon: "Download",
        tone: Tone::Secondary,
        blocks: &[
            Block::Paragraph("Начните работу всего за несколько простых шагов:"),
            Block::Steps(&[
                Step { title: "Установите зависимости", code: Some("npm install dochub-sdk"), text: None },
                Step {
                    title: "Импортируйте библиотеку",
                    code: Some("import { DocHub } from 'dochub-sdk'"),
                    text: None,
                },
                Step {
                    title: "Начните использовать",
                    code: None,
                    text: Some("Готово! Теперь вы можете использовать все возможности платформы."),
                },
            ]),
        ],
    },
    DocSection {
        id: SectionId::Examples,
        heading: "Примеры",
        icon: "Code",
        tone: Tone::Accent,
        blocks: &[Block::CodeExamples(&[
            CodeExample {
                title: "Быстрый старт",
                icon: "Zap",
                body: "```js\nconst hub = new DocHub({\n  apiKey: 'your-api-key'\n});\n\nhub.init();\n```\n",
                caption: "Самый простой способ начать работу с платформой.",
            },
            CodeExample {
                title: "Продвинутая конфигурация",
                icon: "Settings",
                body: "```js\nconst hub = new DocHub({\n  apiKey: 'your-api-key',\n  options: {\n    cache: true,\n    timeout: 5000\n  }\n});\n```\n",
                caption: "Настройте параметры под ваши нужды для оптимальной работы.",
            },
        ])],
    },
    DocSection {
        id: SectionId::Api,
        heading: "API Справочник",
        icon: "Book",
        tone: Tone::Primary,
        blocks: &[Block::Endpoints(&[
            Endpoint {
                method: HttpMethod::Get,
                path: "/api/docs",
                description: "Получить список всех доступных документов.",
            },
            Endpoint {
                method: HttpMethod::Post,
                path: "/api/docs/create",
                description: "Создать новый документ с заданными параметрами.",
            },
            Endpoint {
                method: HttpMethod::Put,
                path: "/api/docs/:id",
                description: "Обновить существующий документ по его ID.",
            },
            Endpoint {
                method: HttpMethod::Delete,
                path: "/api/docs/:id",
                description: "Удалить документ из системы.",
            },
        ])],
    },
    DocSection {
        id: SectionId::Faq,
        heading: "FAQ",
        icon: "HelpCircle",
        tone: Tone::Accent,
        blocks: &[Block::Faq(&[
            FaqEntry {
                question: "Как начать использовать платформу?",
                answer: "Просто следуйте инструкциям в разделе \"Установка\". Процесс занимает \
                         не более 5 минут и не требует специальных знаний.",
            },
            FaqEntry {
                question: "Какие есть ограничения бесплатного плана?",
                answer: "Бесплатный план включает до 1000 запросов в месяц и базовую \
                         поддержку. Для больших нагрузок рекомендуем рассмотреть платные планы.",
            },
            FaqEntry {
                question: "Как получить API ключ?",
                answer: "Зарегистрируйтесь на платформе и перейдите в настройки аккаунта. \
                         Там вы найдете раздел \"API ключи\", где можно сгенерировать новый ключ.",
            },
            FaqEntry {
                question: "Поддерживается ли TypeScript?",
                answer: "Да! Наша библиотека полностью написана на TypeScript и включает \
                         все необходимые типы для комфортной разработки.",
            },
        ])],
    },
    DocSection {
        id: SectionId::Support,
        heading: "Поддержка",
        icon: "MessageCircle",
        tone: Tone::Secondary,
        blocks: &[Block::SupportCards(&[
            SupportCard {
                title: "Email",
                icon: "Mail",
                tone: Tone::Primary,
                text: "Напишите нам на почту для детальной консультации.",
                action: SupportAction::Link {
                    href: "mailto:support@dochub.com",
                    label: "support@dochub.com",
                    external: false,
                },
            },
            SupportCard {
                title: "Чат",
                icon: "MessageSquare",
                tone: Tone::Secondary,
                text: "Онлайн-чат доступен с 9:00 до 21:00 по МСК.",
                action: SupportAction::Button { label: "Открыть чат", tone: Tone::Secondary },
            },
            SupportCard {
                title: "GitHub",
                icon: "Github",
                tone: Tone::Accent,
                text: "Сообщите о баге или предложите улучшение.",
                action: SupportAction::Link {
                    href: "https://github.com/dochub",
                    label: "github.com/dochub",
                    external: true,
                },
            },
            SupportCard {
                title: "База знаний",
                icon: "BookOpen",
                tone: Tone::Primary,
                text: "Изучите руководства и статьи по использованию.",
                action: SupportAction::Button { label: "Перейти к статьям", tone: Tone::Outline },
            },
        ])],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_markdown;

    #[test]
    fn test_sections_follow_menu_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_section_id_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_str(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_str("pricing"), None);
    }

    #[test]
    fn test_content_shape() {
        let count = |id: SectionId| {
            SECTIONS
                .iter()
                .find(|s| s.id == id)
                .map(|s| {
                    s.blocks
                        .iter()
                        .map(|b| match b {
                            Block::Steps(v) => v.len(),
                            Block::CodeExamples(v) => v.len(),
                            Block::Endpoints(v) => v.len(),
                            Block::Faq(v) => v.len(),
                            Block::SupportCards(v) => v.len(),
                            _ => 0,
                        })
                        .sum::<usize>()
                })
                .unwrap_or(0)
        };
        assert_eq!(count(SectionId::Installation), 3);
        assert_eq!(count(SectionId::Examples), 2);
        assert_eq!(count(SectionId::Api), 4);
        assert_eq!(count(SectionId::Faq), 4);
        assert_eq!(count(SectionId::Support), 4);
    }

    #[test]
    fn test_code_examples_render_as_highlighted_blocks() {
        let examples = SECTIONS.iter().flat_map(|s| s.blocks).filter_map(|b| match b {
            Block::CodeExamples(v) => Some(*v),
            _ => None,
        });
        for example in examples.flatten() {
            let html = parse_markdown(example.body);
            assert!(html.starts_with("<pre"), "{}: {}", example.title, html);
            assert!(html.contains("DocHub"));
            assert!(!html.contains("```"));
        }
    }

    #[test]
    fn test_default_section() {
        assert_eq!(SectionId::default(), SectionId::Introduction);
    }
}
