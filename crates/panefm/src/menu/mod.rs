//! Modal menus.
//!
//! While an overlay is active it receives every key instead of the
//! workspace. It hands control back by returning `Disconnect`, or
//! `Run(action)` to disconnect and have the action applied.
//!
//! Built-in menus are `layout`, `workspace` and `command`; user menus from
//! the config run shell command lines and take precedence over built-ins
//! of the same name. `Prompt` is the one-line text overlay.

mod prompt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filer::LayoutMode;
use crate::keymap::Action;
use crate::ui::render_list_overlay;

pub use prompt::Prompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    Continue,
    Disconnect,
    Run(Action),
}

pub trait Overlay {
    fn resize(&mut self, area: Rect);

    fn draw(&self, frame: &mut Frame);

    fn input(&mut self, key: KeyEvent) -> OverlayOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: Option<char>,
    pub label: String,
    pub action: Action,
}

impl MenuItem {
    fn new(key: char, label: &str, action: Action) -> Self {
        Self {
            key: Some(key),
            label: label.to_string(),
            action,
        }
    }

    fn display(&self) -> String {
        match self.key {
            Some(key) => format!("{key}  {}", self.label),
            None => format!("   {}", self.label),
        }
    }
}

#[derive(Debug)]
pub struct Menu {
    name: String,
    items: Vec<MenuItem>,
    selected: usize,
    area: Rect,
}

impl Menu {
    /// Build the menu called `name`. Unknown names fail with
    /// `Error::UnknownMenu`.
    pub fn new(name: &str, config: &Config) -> Result<Self> {
        let items = match config.menus.get(name) {
            Some(items) => items
                .iter()
                .map(|item| MenuItem {
                    key: item.key,
                    label: item.label.clone(),
                    action: if item.terminal {
                        Action::Spawn(item.command.clone())
                    } else {
                        Action::Run {
                            command: item.command.clone(),
                            background: item.background,
                        }
                    },
                })
                .collect(),
            None => builtin(name).ok_or_else(|| Error::UnknownMenu(name.to_string()))?,
        };
        Ok(Self {
            name: name.to_string(),
            items,
            selected: 0,
            area: Rect::default(),
        })
    }

    #[cfg(test)]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    fn run(&self, item: Option<&MenuItem>) -> OverlayOutcome {
        match item {
            Some(item) => OverlayOutcome::Run(item.action.clone()),
            None => OverlayOutcome::Disconnect,
        }
    }
}

fn builtin(name: &str) -> Option<Vec<MenuItem>> {
    let items = match name {
        "layout" => vec![
            MenuItem::new('t', "tile", Action::Layout(LayoutMode::Tile)),
            MenuItem::new('T', "tile top", Action::Layout(LayoutMode::TileTop)),
            MenuItem::new('b', "tile bottom", Action::Layout(LayoutMode::TileBottom)),
            MenuItem::new('l', "one line", Action::Layout(LayoutMode::OneLine)),
            MenuItem::new('c', "one column", Action::Layout(LayoutMode::OneColumn)),
            MenuItem::new('f', "fullscreen", Action::Layout(LayoutMode::Fullscreen)),
        ],
        "workspace" => vec![
            MenuItem::new('c', "create workspace", Action::CreateWorkspace),
            MenuItem::new('d', "close workspace", Action::CloseWorkspace),
            MenuItem::new('r', "rename workspace", Action::RenameWorkspace),
            MenuItem::new('f', "next workspace", Action::NextWorkspace),
            MenuItem::new('b', "previous workspace", Action::PrevWorkspace),
            MenuItem::new('n', "create pane", Action::CreatePane),
            MenuItem::new('w', "close pane", Action::ClosePane),
        ],
        "command" => vec![
            MenuItem::new('s', "shell", Action::Shell),
            MenuItem::new('e', "edit", Action::Edit),
            MenuItem::new('t', "terminal", Action::Terminal),
            MenuItem::new('r', "reload", Action::ReloadAll),
            MenuItem::new('o', "go to neighbor directory", Action::ChdirNeighbor),
            MenuItem::new('l', "swap with next pane", Action::SwapNext),
            MenuItem::new('h', "swap with previous pane", Action::SwapPrev),
        ],
        _ => return None,
    };
    Some(items)
}

impl Overlay for Menu {
    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn draw(&self, frame: &mut Frame) {
        let labels: Vec<String> = self.items.iter().map(MenuItem::display).collect();
        render_list_overlay(frame, self.area, &self.name, &labels, self.selected);
    }

    fn input(&mut self, key: KeyEvent) -> OverlayOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => {
                    self.move_selection(1);
                    OverlayOutcome::Continue
                }
                KeyCode::Char('p') => {
                    self.move_selection(-1);
                    OverlayOutcome::Continue
                }
                KeyCode::Char('c') | KeyCode::Char('g') => OverlayOutcome::Disconnect,
                _ => OverlayOutcome::Continue,
            };
        }
        // Item keys win over the navigation keys.
        if let KeyCode::Char(c) = key.code {
            if let Some(item) = self.items.iter().find(|item| item.key == Some(c)) {
                return self.run(Some(item));
            }
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => OverlayOutcome::Disconnect,
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                OverlayOutcome::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                OverlayOutcome::Continue
            }
            KeyCode::Enter => self.run(self.items.get(self.selected)),
            _ => OverlayOutcome::Continue,
        }
    }
}
