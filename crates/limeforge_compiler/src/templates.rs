//! Text templates for generated LimeJS source.
//!
//! Pure functions from structured render contexts to text; no template
//! engine. Every function returns its statement without a trailing newline,
//! and callers join sections with blank lines, which keeps output
//! byte-for-byte reproducible.

/// One indentation unit of generated source.
pub const INDENT: &str = "    ";

/// Indents every non-empty line by one unit.
#[must_use]
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A function expression over already-assembled body statements.
#[must_use]
pub fn function_expr(args: &str, body: &str) -> String {
    if body.is_empty() {
        format!("function ({args}) {{\n}}")
    } else {
        format!("function ({args}) {{\n{}\n}}", indent(body))
    }
}

/// Superclass constructor invocation.
#[must_use]
pub fn super_call(parent: &str) -> String {
    format!("{parent}.call(this);")
}

/// Class declaration: constructor binding plus inheritance wiring.
#[must_use]
pub fn constructor_statement(class: &str, parent: &str, function: &str) -> String {
    format!("var {class} = {function};\ngoog.inherits({class}, {parent});")
}

/// Prototype method binding.
#[must_use]
pub fn method_statement(class: &str, method: &str, function: &str) -> String {
    format!("{class}.prototype.{method} = {function};")
}

/// Shared event-bus declaration.
#[must_use]
pub fn event_bus_statement() -> String {
    "project.events = new goog.events.EventTarget();".to_string()
}

/// Symbolic constant for one declared event.
#[must_use]
pub fn event_constant_statement(constant: &str, event: &str) -> String {
    format!("{constant} = '{event}';")
}

/// Listener registration emitted into a constructor body.
#[must_use]
pub fn listener_statement(constant: &str, method: &str) -> String {
    format!("goog.events.listen(project.events, {constant}, goog.bind(this.{method}, this));")
}

/// Periodic dispatch bootstrap for the step event.
#[must_use]
pub fn schedule_statement(constant: &str, interval_ms: i64) -> String {
    format!(
        "lime.scheduleManager.scheduleWithDelay(function () {{\n{INDENT}project.events.dispatchEvent({constant});\n}}, project.events, {interval_ms});"
    )
}

/// Render context for the final project document.
pub struct ProjectContext<'a> {
    /// Event-bus declaration plus one constant per event, when the project
    /// declares any events.
    pub events_block: Option<String>,
    /// Rendered world classes, in stored order.
    pub worlds: Vec<String>,
    /// Rendered game object classes, in stored order.
    pub game_objects: Vec<String>,
    /// Canonical name of the starting world.
    pub starting_world: &'a str,
    /// Periodic scheduling bootstrap, when a step event is declared.
    pub schedule: Option<String>,
}

/// Closure namespace requirements of every generated document.
const REQUIRES: [&str; 6] = [
    "goog.require('goog.events');",
    "goog.require('goog.events.EventTarget');",
    "goog.require('lime.Director');",
    "goog.require('lime.Scene');",
    "goog.require('lime.Sprite');",
    "goog.require('lime.scheduleManager');",
];

/// Assembles the final document: preamble, classes, entrypoint binding the
/// starting world as the initial scene, and the compiled-mode export.
#[must_use]
pub fn project_document(ctx: &ProjectContext<'_>) -> String {
    let mut sections: Vec<String> = vec![
        "goog.provide('project');".to_string(),
        REQUIRES.join("\n"),
    ];

    if let Some(events) = &ctx.events_block {
        sections.push(events.clone());
    }
    sections.extend(ctx.worlds.iter().cloned());
    sections.extend(ctx.game_objects.iter().cloned());

    let mut start_body = vec![
        "var director = new lime.Director(document.body, 1024, 768);".to_string(),
        format!("var scene = new {}();", ctx.starting_world),
    ];
    if let Some(schedule) = &ctx.schedule {
        start_body.push(schedule.clone());
    }
    start_body.push("director.replaceScene(scene);".to_string());
    sections.push(format!(
        "project.start = {};",
        function_expr("", &start_body.join("\n"))
    ));

    sections.push("goog.exportSymbol('project.start', project.start);".to_string());

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}
