use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde_json::json;

use crate::error::Result;
use crate::geometry::{Rect, Scale};
use crate::instruction::{Instruction, Kind, parse_rule};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;
use crate::registry::GeometryRegistry;
use crate::transform::Transform;
use crate::widget::{ChildState, WidgetHost, WidgetId};

/// Configuration knobs for the flow engine.
#[derive(Clone, Default)]
pub struct FlowConfig {
    /// Uniform margin around every managed child, in logical units.
    pub padding: i32,
    /// Scale factor applied to logical units at layout time.
    pub scale: Scale,
    /// Optional structured logger for pass lifecycle events.
    pub logger: Option<Logger>,
    /// Metrics accumulator shared with the host.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
}

impl FlowConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Directional rule-based layout engine.
///
/// Children are positioned by replaying registered instructions in order:
/// each one nudges or grows its widget one unit at a time along a compass
/// direction until the candidate rectangle leaves the container or runs
/// into a sibling that was placed earlier in the same pass. The engine owns
/// its instruction list and state table but never the widgets themselves;
/// every pass re-checks which children actually exist.
///
/// A pass runs synchronously to completion on the calling thread and is
/// not re-entrant: [`WidgetHost::place`] implementations must not call
/// back into the engine.
pub struct FlowEngine {
    instructions: Vec<Instruction>,
    states: Vec<ChildState>,
    registry: GeometryRegistry,
    config: FlowConfig,
    laid_out: bool,
}

impl Default for FlowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::with_config(FlowConfig::default())
    }

    pub fn with_config(config: FlowConfig) -> Self {
        Self {
            instructions: Vec::new(),
            states: Vec::new(),
            registry: GeometryRegistry::new(),
            config,
            laid_out: false,
        }
    }

    pub fn config_mut(&mut self) -> &mut FlowConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &GeometryRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GeometryRegistry {
        &mut self.registry
    }

    /// Widgets currently tracked by the state table, in child order as of
    /// the last pass.
    pub fn tracked_children(&self) -> Vec<WidgetId> {
        self.states.iter().map(|s| s.widget.clone()).collect()
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Register placement rules for a widget.
    ///
    /// The rule string is expanded into ordered instructions appended to
    /// the engine's list; a malformed string registers nothing. The widget
    /// must also be a direct child of the container by the time layout
    /// runs, or its instructions are purged.
    pub fn rule(&mut self, widget: impl Into<WidgetId>, rule: &str) -> Result<()> {
        let widget = widget.into();
        let mut parsed = parse_rule(&widget, rule)?;
        self.instructions.append(&mut parsed);
        Ok(())
    }

    /// Update the padding margin and rerun layout.
    pub fn set_padding(&mut self, host: &mut dyn WidgetHost, padding: i32) {
        self.config.padding = padding;
        self.layout(host);
    }

    /// Run layout once if it has never run. Hosts call this immediately
    /// before the container is first rendered.
    pub fn ensure_layout(&mut self, host: &mut dyn WidgetHost) {
        if !self.laid_out {
            self.layout(host);
        }
    }

    /// Recompute geometry for every managed child. Hosts call this from
    /// their resize hook.
    pub fn layout(&mut self, host: &mut dyn WidgetHost) {
        let started = Instant::now();
        self.prepare(host);
        self.process(host);
        self.record_metrics(|m| m.record_pass());
        let container = serde_json::to_value(host.container()).unwrap_or_default();
        self.log_pass(
            LogLevel::Info,
            "layout_pass",
            [
                json_kv("container", container),
                json_kv("children", json!(self.states.len())),
                json_kv("instructions", json!(self.instructions.len())),
                json_kv("elapsed_ms", json!(started.elapsed().as_millis() as u64)),
            ],
        );
    }

    /// Phase one: reconcile the state table against the host's actual
    /// children and reset everyone to the deterministic starting point.
    ///
    /// Runs in fixed order: purge stale states, purge stale instructions,
    /// adopt new children (capturing their current size as natural size),
    /// then clear every `placed` flag and park each child at its natural
    /// size flush to the bottom-right interior corner.
    pub fn prepare(&mut self, host: &mut dyn WidgetHost) {
        let children = host.children();

        let states_before = self.states.len();
        self.states
            .retain(|s| host.exists(&s.widget) && children.contains(&s.widget));
        let purged_states = states_before - self.states.len();

        let instructions_before = self.instructions.len();
        self.instructions
            .retain(|i| host.exists(&i.widget) && children.contains(&i.widget));
        let purged_instructions = instructions_before - self.instructions.len();

        let mut adopted = 0usize;
        for child in &children {
            if !self.states.iter().any(|s| &s.widget == child) {
                if let Some(rect) = host.rect_of(child) {
                    self.states.push(ChildState::new(child.clone(), rect.size()));
                    adopted += 1;
                }
            }
        }

        let container = host.container();
        let padding = self.padding_px();
        for state in &mut self.states {
            state.placed = false;
            let natural = state.natural;
            host.place(
                &state.widget,
                Rect::new(
                    container.x + container.width - natural.width - padding,
                    container.y + container.height - natural.height - padding,
                    natural.width,
                    natural.height,
                ),
            );
        }

        self.record_metrics(|m| {
            m.record_purged(purged_states, purged_instructions);
            m.record_adopted(adopted);
        });
        self.log_pass(
            LogLevel::Debug,
            "prepare_completed",
            [
                json_kv("children", json!(self.states.len())),
                json_kv("purged_states", json!(purged_states)),
                json_kv("purged_instructions", json!(purged_instructions)),
                json_kv("adopted", json!(adopted)),
            ],
        );
    }

    /// Phase two: replay every instruction in registration order.
    pub fn process(&mut self, host: &mut dyn WidgetHost) {
        let bounds = Transform::container(host.container());
        let padding = self.padding_px();

        for idx in 0..self.instructions.len() {
            let instruction = self.instructions[idx].clone();
            let Some(rect) = host.rect_of(&instruction.widget) else {
                continue;
            };

            let dx = instruction.directive.x_step();
            let dy = instruction.directive.y_step();
            let mut wt = Transform::for_widget(instruction.widget.clone(), rect, padding);
            let original = wt.staging().size();
            let mut steps = 0u64;

            loop {
                match instruction.directive.kind() {
                    Kind::Move => wt.translate(dx, dy),
                    Kind::Expand | Kind::Center => wt.scale(dx, dy),
                }

                if !bounds.contains(&wt) {
                    break;
                }
                if self.collides_with_placed(&*host, &instruction.widget, &wt) {
                    break;
                }
                steps += 1;
            }

            // Stepped just past the first illegal position.
            wt.rollback();

            if instruction.directive.kind() == Kind::Center {
                wt.contract(original.width, original.height);
                wt.commit();
            }

            wt.apply(host);

            if let Some(state) = self
                .states
                .iter_mut()
                .find(|s| s.widget == instruction.widget)
            {
                state.placed = true;
            }
            self.record_metrics(|m| m.record_instruction(steps));
        }

        let placed: Vec<(WidgetId, Rect)> = self
            .states
            .iter()
            .filter_map(|s| host.rect_of(&s.widget).map(|rect| (s.widget.clone(), rect)))
            .collect();
        self.registry.sync_pass(&placed);
        self.laid_out = true;

        let fingerprint = self
            .registry
            .fingerprint()
            .map(|hash| hash.to_hex().to_string())
            .unwrap_or_default();
        self.log_pass(
            LogLevel::Debug,
            "process_completed",
            [
                json_kv("instructions", json!(self.instructions.len())),
                json_kv("fingerprint", json!(fingerprint)),
            ],
        );
    }

    fn padding_px(&self) -> i32 {
        self.config.scale.px(self.config.padding)
    }

    /// Overlap check against siblings placed earlier in this pass. Sibling
    /// transforms carry no padding; only the stepping widget does.
    fn collides_with_placed(
        &self,
        host: &dyn WidgetHost,
        widget: &WidgetId,
        wt: &Transform,
    ) -> bool {
        for state in &self.states {
            if !state.placed || state.widget == *widget {
                continue;
            }
            let Some(rect) = host.rect_of(&state.widget) else {
                continue;
            };
            let st = Transform::for_widget(state.widget.clone(), rect, 0);
            if wt.colliding(&st) {
                return true;
            }
        }
        false
    }

    fn record_metrics(&self, update: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }

    fn log_pass<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, "flow::engine", message, fields);
            let _ = logger.log_event(event);
        }
    }
}
