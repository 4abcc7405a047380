//! Message catalog
//!
//! Every line the shell prints comes from here, in the session's locale.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ru" | "russian" => Ok(Locale::Russian),
            other => Err(format!("unknown locale '{}' (expected en or ru)", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::English => "en",
            Locale::Russian => "ru",
        })
    }
}

impl Locale {
    pub fn welcome(&self) -> &'static str {
        match self {
            Locale::English => {
                "Welcome to the Virtual Shell emulator!\n\
                 Enter a command (e.g. ls, cd, mkdir, chmod, chown). Type exit to quit."
            }
            Locale::Russian => {
                "Добро пожаловать в эмулятор Virtual Shell!\n\
                 Введите команду (например, ls, cd, mkdir, chmod, chown). Для выхода введите exit."
            }
        }
    }

    pub fn command_not_found(&self, verb: &str) -> String {
        match self {
            Locale::English => format!("{}: command not found", verb),
            Locale::Russian => format!("{}: команда не найдена", verb),
        }
    }

    pub fn not_enough_arguments(&self, verb: &str) -> String {
        match self {
            Locale::English => format!("{}: not enough arguments", verb),
            Locale::Russian => format!("{}: недостаточно аргументов", verb),
        }
    }

    // ls

    pub fn directory_not_found(&self) -> &'static str {
        match self {
            Locale::English => "Error: directory not found.",
            Locale::Russian => "Ошибка: каталог не найден.",
        }
    }

    pub fn empty_directory(&self) -> &'static str {
        match self {
            Locale::English => "Directory is empty.",
            Locale::Russian => "Каталог пуст.",
        }
    }

    pub fn not_a_directory(&self) -> &'static str {
        match self {
            Locale::English => "Not a directory.",
            Locale::Russian => "Это не каталог.",
        }
    }

    // cd

    pub fn moved_to(&self, dir: &str) -> String {
        match self {
            Locale::English => format!("Moved to directory: {}", dir),
            Locale::Russian => format!("Перешли в каталог: {}", dir),
        }
    }

    pub fn no_such_directory(&self, arg: &str) -> String {
        match self {
            Locale::English => format!("cd: {}: No such directory", arg),
            Locale::Russian => format!("cd: {}: Нет такого каталога", arg),
        }
    }

    // mkdir

    pub fn dir_created(&self, name: &str) -> String {
        match self {
            Locale::English => format!("mkdir: directory {} created", name),
            Locale::Russian => format!("mkdir: каталог {} создан", name),
        }
    }

    pub fn dir_exists(&self, name: &str) -> String {
        match self {
            Locale::English => format!("mkdir: directory {} already exists", name),
            Locale::Russian => format!("mkdir: каталог {} уже существует", name),
        }
    }

    pub fn mkdir_missing_operand(&self) -> &'static str {
        match self {
            Locale::English => "mkdir: missing operand",
            Locale::Russian => "mkdir: не указан операнд",
        }
    }

    pub fn invalid_dir_name(&self, name: &str) -> String {
        match self {
            Locale::English => format!("mkdir: invalid directory name '{}'", name),
            Locale::Russian => format!("mkdir: недопустимое имя каталога '{}'", name),
        }
    }

    // chmod / chown

    pub fn mode_changed(&self, name: &str, mode: &str) -> String {
        match self {
            Locale::English => format!("chmod: mode of '{}' changed to {}", name, mode),
            Locale::Russian => format!("chmod: права доступа для '{}' изменены на {}", name, mode),
        }
    }

    pub fn invalid_mode(&self, mode: &str) -> String {
        match self {
            Locale::English => format!("chmod: invalid mode: '{}'", mode),
            Locale::Russian => format!("chmod: неверный режим: '{}'", mode),
        }
    }

    pub fn chmod_not_found(&self, name: &str) -> String {
        match self {
            Locale::English => {
                format!("chmod: cannot access '{}': No such file or directory", name)
            }
            Locale::Russian => format!(
                "chmod: невозможно изменить права '{}': файл или каталог не найден",
                name
            ),
        }
    }

    pub fn owner_changed(&self, name: &str, user: &str, group: &str) -> String {
        match self {
            Locale::English => {
                format!("chown: owner of '{}' changed to {}:{}", name, user, group)
            }
            Locale::Russian => {
                format!("chown: владелец файла '{}' изменен на {}:{}", name, user, group)
            }
        }
    }

    pub fn chown_not_found(&self, name: &str) -> String {
        match self {
            Locale::English => {
                format!("chown: cannot change owner of '{}': No such file or directory", name)
            }
            Locale::Russian => format!(
                "chown: невозможно изменить владельца '{}': файл или каталог не найден",
                name
            ),
        }
    }
}
