use std::path::{Path, PathBuf};
use std::rc::Rc;

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::BorderType;
use ratatui::Terminal;

use super::Workspace;
use crate::filer::layout::LayoutMode;
use crate::filer::testing::{take_draws, MockPane};
use crate::filer::Pane;
use crate::process::testing::RecordingEnv;

fn workspace(paths: &[&str], cursor: usize) -> (Workspace<MockPane>, Rc<RecordingEnv>) {
    let env = Rc::new(RecordingEnv::new("/home/user"));
    let paths = paths.iter().map(PathBuf::from).collect();
    let ws = Workspace::from_parts("1", LayoutMode::Tile, paths, cursor, env.clone());
    (ws, env)
}

fn order(ws: &Workspace<MockPane>) -> Vec<&Path> {
    ws.panes().iter().map(|pane| pane.path()).collect()
}

#[test]
fn new_workspace_has_one_home_pane() {
    let env = Rc::new(RecordingEnv::new("/home/user"));
    let ws: Workspace<MockPane> = Workspace::new("1", LayoutMode::Tile, env);
    assert_eq!(ws.panes().len(), 1);
    assert_eq!(ws.cursor(), 0);
    assert_eq!(ws.focused().path(), Path::new("/home/user"));
    assert_eq!(ws.layout(), LayoutMode::Tile);
}

#[test]
fn from_parts_clamps_cursor_and_seeds_empty_workspaces() {
    let (ws, _env) = workspace(&["/a", "/b"], 9);
    assert_eq!(ws.cursor(), 1);

    let (ws, _env) = workspace(&[], 0);
    assert_eq!(order(&ws), vec![Path::new("/home/user")]);
}

#[test]
fn create_pane_prepends_home_and_focuses_it() {
    let (mut ws, env) = workspace(&["/a", "/b", "/c"], 2);
    ws.create_pane().expect("create");
    assert_eq!(ws.cursor(), 0);
    assert_eq!(
        order(&ws),
        vec![
            Path::new("/home/user"),
            Path::new("/a"),
            Path::new("/b"),
            Path::new("/c")
        ]
    );
    assert_eq!(ws.focused().reloads, 1);
    assert_eq!(env.last(), Some(PathBuf::from("/home/user")));
}

#[test]
fn close_pane_refuses_to_remove_last_pane() {
    let (mut ws, env) = workspace(&["/a"], 0);
    ws.close_pane().expect("close");
    assert_eq!(ws.panes().len(), 1);
    assert_eq!(ws.cursor(), 0);
    assert!(env.visited.borrow().is_empty());
}

#[test]
fn close_pane_clamps_cursor_and_attaches() {
    let (mut ws, env) = workspace(&["/a", "/b", "/c"], 2);
    ws.close_pane().expect("close");
    assert_eq!(order(&ws), vec![Path::new("/a"), Path::new("/b")]);
    assert_eq!(ws.cursor(), 1);
    assert_eq!(env.last(), Some(PathBuf::from("/b")));

    ws.set_cursor(0).expect("focus first");
    ws.close_pane().expect("close first");
    assert_eq!(order(&ws), vec![Path::new("/b")]);
    assert_eq!(ws.cursor(), 0);
}

#[test]
fn move_cursor_wraps_both_ways() {
    let (mut ws, env) = workspace(&["/a", "/b", "/c"], 2);
    ws.move_cursor(1).expect("forward");
    assert_eq!(ws.cursor(), 0);
    ws.move_cursor(-1).expect("back");
    assert_eq!(ws.cursor(), 2);
    assert_eq!(env.last(), Some(PathBuf::from("/c")));
}

#[test]
fn full_cycle_returns_to_start() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c", "/d"], 1);
    ws.move_cursor(4).expect("forward cycle");
    assert_eq!(ws.cursor(), 1);
    ws.move_cursor(-4).expect("backward cycle");
    assert_eq!(ws.cursor(), 1);
}

#[test]
fn set_cursor_clamps_into_range() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c"], 1);
    ws.set_cursor(-5).expect("low");
    assert_eq!(ws.cursor(), 0);
    ws.set_cursor(99).expect("high");
    assert_eq!(ws.cursor(), 2);
}

#[test]
fn swap_next_moves_focused_pane_and_follows_it() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c"], 0);
    ws.swap_next().expect("swap");
    assert_eq!(order(&ws), vec![Path::new("/b"), Path::new("/a"), Path::new("/c")]);
    assert_eq!(ws.cursor(), 1);
    assert_eq!(ws.focused().path(), Path::new("/a"));
}

#[test]
fn swap_wraps_around_the_ends() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c"], 2);
    ws.swap_next().expect("swap");
    assert_eq!(order(&ws), vec![Path::new("/c"), Path::new("/b"), Path::new("/a")]);
    assert_eq!(ws.cursor(), 0);
    assert_eq!(ws.focused().path(), Path::new("/c"));
}

#[test]
fn swap_next_then_prev_restores_order_and_cursor() {
    for cursor in 0..3 {
        let (mut ws, _env) = workspace(&["/a", "/b", "/c"], cursor);
        ws.swap_next().expect("next");
        ws.swap_prev().expect("prev");
        assert_eq!(order(&ws), vec![Path::new("/a"), Path::new("/b"), Path::new("/c")]);
        assert_eq!(ws.cursor(), cursor);
    }
}

#[test]
fn chdir_neighbor_copies_next_location() {
    let (mut ws, env) = workspace(&["/a", "/b"], 1);
    ws.chdir_neighbor().expect("neighbor");
    assert_eq!(order(&ws), vec![Path::new("/a"), Path::new("/a")]);
    assert_eq!(env.last(), Some(PathBuf::from("/a")));
}

#[test]
fn chdir_focused_failure_is_reported_not_fatal() {
    let (mut ws, env) = workspace(&["/a"], 0);
    let err = ws.chdir_focused(Path::new("/missing")).expect_err("missing");
    assert!(!err.is_fatal());
    assert_eq!(ws.focused().path(), Path::new("/a"));
    assert!(env.visited.borrow().is_empty());
}

#[test]
fn lost_working_directory_is_fatal() {
    let (mut ws, env) = workspace(&["/a", "/b"], 0);
    env.fail.set(true);
    let err = ws.move_cursor(1).expect_err("attach fails");
    assert!(err.is_fatal());
}

#[test]
fn set_visible_clears_and_reloads_listings() {
    let (mut ws, env) = workspace(&["/a", "/b"], 1);
    ws.reload_all().expect("reload");
    assert!(ws.panes().iter().all(|pane| pane.listed));
    assert_eq!(env.last(), Some(PathBuf::from("/b")));

    ws.set_visible(false).expect("hide");
    assert!(ws.panes().iter().all(|pane| !pane.listed));

    ws.set_visible(true).expect("show");
    assert!(ws.panes().iter().all(|pane| pane.listed && pane.reloads == 2));
}

#[test]
fn resize_and_layout_changes_reallocate_panes() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c"], 0);
    ws.resize(Rect::new(0, 0, 9, 9));
    let areas: Vec<Rect> = ws.panes().iter().map(|pane| pane.area).collect();
    assert_eq!(
        areas,
        vec![Rect::new(0, 0, 4, 9), Rect::new(4, 0, 5, 4), Rect::new(4, 4, 5, 5)]
    );

    ws.set_layout(LayoutMode::OneLine);
    let widths: Vec<u16> = ws.panes().iter().map(|pane| pane.area.width).collect();
    assert_eq!(widths, vec![3, 3, 3]);
}

#[test]
fn structural_changes_keep_layout_exact() {
    let (mut ws, _env) = workspace(&["/a", "/b"], 0);
    ws.set_layout(LayoutMode::TileBottom);
    ws.resize(Rect::new(0, 0, 20, 10));
    ws.create_pane().expect("create");
    let cells: u32 = ws
        .panes()
        .iter()
        .map(|pane| u32::from(pane.area.width) * u32::from(pane.area.height))
        .sum();
    assert_eq!(cells, 200);
}

fn draw(ws: &Workspace<MockPane>) -> Vec<(PathBuf, bool)> {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).expect("terminal");
    take_draws();
    terminal.draw(|frame| ws.draw(frame)).expect("draw");
    take_draws()
}

#[test]
fn focused_pane_draws_last() {
    let (ws, _env) = workspace(&["/a", "/b", "/c"], 1);
    assert_eq!(
        draw(&ws),
        vec![
            (PathBuf::from("/a"), false),
            (PathBuf::from("/c"), false),
            (PathBuf::from("/b"), true),
        ]
    );
}

#[test]
fn fullscreen_draws_only_focused_pane() {
    let (mut ws, _env) = workspace(&["/a", "/b", "/c"], 2);
    ws.set_layout(LayoutMode::Fullscreen);
    assert_eq!(draw(&ws), vec![(PathBuf::from("/c"), true)]);
}

#[test]
fn border_style_reaches_current_and_new_panes() {
    let (mut ws, _env) = workspace(&["/a", "/b"], 0);
    ws.set_border(BorderType::Thick);
    ws.create_pane().expect("create");

    assert_eq!(ws.panes().len(), 3);
    assert!(ws.panes().iter().all(|pane| pane.border == BorderType::Thick));
}

#[test]
fn set_title_renames_the_workspace() {
    let (mut ws, _env) = workspace(&["/a"], 0);
    ws.set_title("music");
    assert_eq!(ws.title(), "music");
}
