use glasspane_common::{BridgeCommand, BridgeNotification, ResizeDirection};
use glasspane_config::schema::AnimationConfig;

use super::machine::{AnimationMachine, UiEffect, UiEvent};
use super::phase::AnimationPhase;

const UI_SCRIPT_TEMPLATE: &str = r#"
(function() {
    var PHASES = [@PHASES@];
    var TRANSIENT = [@TRANSIENT@];
    var bridge = window.glasspane;
    var sent = {};

    function app() {
        return document.getElementById('app');
    }

    function applyPhase(phase) {
        var el = app();
        if (!el) {
            return;
        }
        PHASES.forEach(function(c) { el.classList.remove(c); });
        if (phase) {
            el.classList.add(phase);
        }
    }

    function clearTransient() {
        var el = app();
        if (!el) {
            return;
        }
        TRANSIENT.forEach(function(c) { el.classList.remove(c); });
    }

    function once(kind, send) {
        if (sent[kind]) {
            return;
        }
        sent[kind] = true;
        send();
    }

    var on = {
@HANDLERS@
    };

    function onClick(id, handler) {
        var el = document.getElementById(id);
        if (el) {
            el.addEventListener('click', handler);
        }
    }

    document.addEventListener('DOMContentLoaded', function() {
        onClick('minimize', on.minimize);
        onClick('maximize', on.maximize);
        onClick('close', on.close);

        document.querySelectorAll('.resize-handle').forEach(function(handle) {
            handle.addEventListener('mousedown', function(e) {
                e.preventDefault();
                var dir = handle.dataset.dir;
                if (dir) {
                    on.resizePressed(dir);
                }
            });
        });
    });

    window.addEventListener('mouseup', on.mouseUp);
    window.addEventListener('load', on.load);

    bridge.onRestore(on.restored);
    bridge.onMaximize(on.maximized);
    bridge.onUnmaximize(on.unmaximized);
})();
"#;

/// Page handlers and the machine event each one renders.
///
/// The resize direction is only a stand-in; the handler passes on the
/// direction of the handle that was pressed.
const HANDLERS: [(&str, UiEvent); 9] = [
    ("minimize", UiEvent::MinimizeClicked),
    ("maximize", UiEvent::MaximizeClicked),
    ("close", UiEvent::CloseClicked),
    ("load", UiEvent::Loaded),
    ("restored", UiEvent::Notified(BridgeNotification::Restored)),
    ("maximized", UiEvent::Notified(BridgeNotification::Maximized)),
    ("unmaximized", UiEvent::Notified(BridgeNotification::Unmaximized)),
    (
        "resizePressed",
        UiEvent::ResizeHandlePressed(ResizeDirection {
            north: false,
            south: true,
            east: true,
            west: false,
        }),
    ),
    ("mouseUp", UiEvent::MouseReleased),
];

fn phase_literal(phase: AnimationPhase) -> String {
    match phase.css_class() {
        Some(class) => format!("'{class}'"),
        None => "null".to_string(),
    }
}

fn phase_list(phases: impl IntoIterator<Item = AnimationPhase>) -> String {
    phases
        .into_iter()
        .map(phase_literal)
        .collect::<Vec<_>>()
        .join(", ")
}

fn bridge_call(command: BridgeCommand) -> &'static str {
    match command {
        BridgeCommand::Minimize => "bridge.minimize()",
        BridgeCommand::Maximize => "bridge.maximize()",
        BridgeCommand::Close => "bridge.close()",
        BridgeCommand::AppReady => "bridge.appReady()",
        BridgeCommand::StartResize(_) => "bridge.startResize(dir)",
        BridgeCommand::StopResize => "bridge.stopResize()",
    }
}

/// Render a list of effects as JavaScript statements on one line.
fn render_effects(machine: &AnimationMachine, effects: &[UiEffect]) -> String {
    effects
        .iter()
        .map(|effect| render_effect(machine, *effect))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_effect(machine: &AnimationMachine, effect: UiEffect) -> String {
    match effect {
        UiEffect::ApplyPhase(phase) => format!("applyPhase({});", phase_literal(phase)),
        UiEffect::ClearTransient => "clearTransient();".to_string(),
        UiEffect::OnNextFrame(phase) => format!(
            "requestAnimationFrame(function() {{ applyPhase({}); }});",
            phase_literal(phase)
        ),
        UiEffect::Schedule { delay, then } => format!(
            "setTimeout(function() {{ {} }}, {});",
            render_effects(machine, &machine.effects(UiEvent::TimerFired(then))),
            delay.as_millis()
        ),
        UiEffect::Send(command) => format!("{};", bridge_call(command)),
        UiEffect::SendOnce(command) => format!(
            "once('{}', function() {{ {}; }});",
            command.kind(),
            bridge_call(command)
        ),
    }
}

fn render_handler(machine: &AnimationMachine, name: &str, event: UiEvent) -> String {
    let param = match event {
        UiEvent::ResizeHandlePressed(_) => "dir",
        _ => "",
    };
    format!(
        "{name}: function({param}) {{ {} }}",
        render_effects(machine, &machine.effects(event))
    )
}

/// Render the page-side chrome controller for the main window from the
/// [`AnimationMachine`] transition table.
///
/// Requires the bridge script to have run first.
pub fn generate_ui_script(config: &AnimationConfig) -> String {
    let machine = AnimationMachine::new(config);
    let phases = phase_list(AnimationPhase::WITH_CLASS);
    let transient = phase_list(
        AnimationPhase::WITH_CLASS
            .into_iter()
            .filter(AnimationPhase::is_transient),
    );
    let handlers = HANDLERS
        .iter()
        .map(|(name, event)| format!("        {},", render_handler(&machine, name, *event)))
        .collect::<Vec<_>>()
        .join("\n");

    UI_SCRIPT_TEMPLATE
        .replace("@PHASES@", &phases)
        .replace("@TRANSIENT@", &transient)
        .replace("@HANDLERS@", &handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> String {
        generate_ui_script(&AnimationConfig::default())
    }

    #[test]
    fn all_placeholders_are_filled() {
        let js = script();
        assert!(!js.contains('@'), "unfilled placeholder in:\n{js}");
    }

    #[test]
    fn phase_lists_come_from_phases() {
        let js = script();
        assert!(js.contains("var PHASES = ['visible', 'fading-out', 'maximizing'];"));
        assert!(js.contains("var TRANSIENT = ['fading-out', 'maximizing'];"));
    }

    #[test]
    fn close_fades_out_then_sends() {
        assert!(script().contains(
            "close: function() { applyPhase('fading-out'); \
             setTimeout(function() { bridge.close(); }, 200); },"
        ));
    }

    #[test]
    fn maximize_dips_then_sends() {
        assert!(script().contains(
            "maximize: function() { applyPhase('maximizing'); \
             setTimeout(function() { bridge.maximize(); }, 200); },"
        ));
    }

    #[test]
    fn load_reveals_and_signals_ready_once() {
        let js = script();
        assert!(js.contains(
            "load: function() { requestAnimationFrame(function() { applyPhase('visible'); }); \
             once('app-ready', function() { bridge.appReady(); }); },"
        ));
        assert_eq!(js.matches("bridge.appReady()").count(), 1);
    }

    #[test]
    fn notifications_settle_then_reveal() {
        let js = script();
        for name in ["restored", "maximized", "unmaximized"] {
            let expected = format!(
                "{name}: function() {{ setTimeout(function() {{ clearTransient(); \
                 requestAnimationFrame(function() {{ applyPhase('visible'); }}); }}, 100); }},"
            );
            assert!(js.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn resize_handlers_forward_direction() {
        let js = script();
        assert!(js.contains("resizePressed: function(dir) { bridge.startResize(dir); },"));
        assert!(js.contains("mouseUp: function() { bridge.stopResize(); },"));
    }

    #[test]
    fn every_handler_matches_the_machine() {
        let config = AnimationConfig {
            exit_delay_ms: 210,
            maximize_delay_ms: 190,
            settle_delay_ms: 120,
        };
        let js = generate_ui_script(&config);
        let machine = AnimationMachine::new(&config);
        for (name, event) in HANDLERS {
            let rendered = render_handler(&machine, name, event);
            assert!(js.contains(&rendered), "missing {rendered}");
        }
        assert!(js.contains("}, 210);"));
        assert!(js.contains("}, 190);"));
        assert!(js.contains("}, 120);"));
    }

    #[test]
    fn every_handler_is_wired() {
        let js = script();
        for (name, _) in HANDLERS {
            assert!(js.contains(&format!("on.{name}")), "on.{name} never registered");
        }
    }

    #[test]
    fn only_calls_bridge_functions() {
        let js = script();
        assert!(!js.contains("window.ipc"));
        assert_eq!(js.matches("bridge.").count() - js.matches("bridge.on").count(), 6);
    }
}
