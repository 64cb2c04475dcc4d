use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Acceleration,
    FinalVelocity,
    Time,
    Displacement,
    Table,
    Plot,
    Presets,
    History,
    Quiz,
    Exit,
}

pub struct MenuEntry {
    pub token: &'static str,
    pub choice: MenuChoice,
    pub label: &'static str,
}

/// Dispatch table: drives both the printed menu and token parsing.
pub const MENU: [MenuEntry; 10] = [
    MenuEntry {
        token: "1",
        choice: MenuChoice::Acceleration,
        label: "Calcular aceleração (a)",
    },
    MenuEntry {
        token: "2",
        choice: MenuChoice::FinalVelocity,
        label: "Calcular velocidade final (v)",
    },
    MenuEntry {
        token: "3",
        choice: MenuChoice::Time,
        label: "Calcular tempo (t)",
    },
    MenuEntry {
        token: "4",
        choice: MenuChoice::Displacement,
        label: "Calcular deslocamento (s)",
    },
    MenuEntry {
        token: "5",
        choice: MenuChoice::Table,
        label: "Tabela posição/velocidade",
    },
    MenuEntry {
        token: "6",
        choice: MenuChoice::Plot,
        label: "Plotar gráfico velocidade vs tempo",
    },
    MenuEntry {
        token: "7",
        choice: MenuChoice::Presets,
        label: "Exemplos pré-definidos",
    },
    MenuEntry {
        token: "8",
        choice: MenuChoice::History,
        label: "Histórico da sessão",
    },
    MenuEntry {
        token: "9",
        choice: MenuChoice::Quiz,
        label: "Quiz de MRUV",
    },
    MenuEntry {
        token: "0",
        choice: MenuChoice::Exit,
        label: "Sair",
    },
];

pub const MENU_PROMPT: &str = "\nEscolha uma opção (0-9): ";

impl MenuChoice {
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        MENU.iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.choice)
    }
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nOpções:")?;
    for entry in &MENU {
        writeln!(out, "{}. {}", entry.token, entry.label)?;
    }
    Ok(())
}
