//! Fan-control style panel laid out entirely by flow rules.
//!
//! Four profile toggles stack down the left edge, two curve editors share
//! the remaining space, and an apply button fills the bottom row. Run with
//! `cargo run --example fan_panel`.

use flow_mvp::{FlowEngine, Rect, Scale, Size, WidgetArena, WidgetHost};

fn print_layout(arena: &WidgetArena, ids: &[String]) {
    let container = arena.container();
    println!(
        "container {}x{} at ({}, {})",
        container.width, container.height, container.x, container.y
    );
    for id in ids {
        let rect = arena.rect(id).expect("widget exists");
        println!(
            "  {:<22} x={:<4} y={:<4} w={:<4} h={}",
            id, rect.x, rect.y, rect.width, rect.height
        );
    }
}

fn main() -> flow_mvp::Result<()> {
    let mut arena = WidgetArena::new(Rect::new(0, 0, 640, 480));
    let mut flow = FlowEngine::new();
    flow.config_mut().padding = 4;
    flow.config_mut().scale = Scale::new(1.5);

    let mut ids = Vec::new();
    let profiles = ["silent", "windows", "performance", "turbo"];
    for (i, name) in profiles.iter().enumerate() {
        let id = arena.insert(format!("profile.{name}"), Size::new(2, 50));
        // Alternate center-left / pack-right so the toggles pair up.
        let rule = if i % 2 == 0 { "/<^=<" } else { "^>=<" };
        flow.rule(&id, rule)?;
        ids.push(id);
    }

    let cpu = arena.insert("editor.cpu", Size::new(2, 2));
    flow.rule(&cpu, "<^/>=<")?;
    let gpu = arena.insert("editor.gpu", Size::new(2, 2));
    flow.rule(&gpu, "^=<")?;

    let apply = arena.insert("apply", Size::new(2, 50));
    flow.rule(&apply, "=<")?;

    // The editors claim the leftover vertical space last.
    flow.rule(&cpu, "=v")?;
    flow.rule(&gpu, "=v")?;

    ids.extend([cpu, gpu, apply]);

    flow.ensure_layout(&mut arena);
    print_layout(&arena, &ids);

    println!();
    println!("resizing...");
    arena.resize_container(Rect::new(0, 0, 800, 600));
    flow.layout(&mut arena);
    print_layout(&arena, &ids);

    if let Some(fingerprint) = flow.registry().fingerprint() {
        println!();
        println!("pass fingerprint: {}", fingerprint.to_hex());
    }

    Ok(())
}
