// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end behavior of factories, loggers and hooks.

use lablog::{
    Config, Hook, HookOutcome, Level, MemoryWriter, Prefix, Writer, build_console_logger,
    build_host_logger,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn config_source_is_lazy_and_called_once_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = calls.clone();
    let factory = build_console_logger(move || {
        counted.fetch_add(1, Ordering::SeqCst);
        Config::new().log_level(Level::None)
    });
    let log = factory.create("browser.test.rs");
    let _child = log.sub(":child");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    log.debug(&[&"test"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    log.raw(&[&"test"]);
    log.f(&[&"test"]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn live_reconfiguration() {
    let capture = Arc::new(MemoryWriter::new());
    let level = Arc::new(Mutex::new(Level::None));
    let shared_level = level.clone();
    let hook = capture.hook();
    let factory = build_host_logger(move || {
        Config::new()
            .log_level(*shared_level.lock().unwrap())
            .hook(hook.clone())
    });
    let log = factory.create("mod");

    log.debug(&[&"x"]);
    assert!(capture.is_empty());

    *level.lock().unwrap() = Level::Debug;
    log.debug(&[&"x"]);
    let calls = capture.drain();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0], "[mod]");
    assert!(calls[0][1].contains("[DEBUG]"), "{:?}", calls[0]);
    assert_eq!(calls[0][2], "x");
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn argument_order_with_prefix() {
    let capture = Arc::new(MemoryWriter::new());
    let factory = build_console_logger(
        Config::new()
            .prefix(Prefix::new(|| "[12:00]".to_string()))
            .hook(capture.hook()),
    );
    factory.create("label").info(&[&"a", &"b"]);
    assert_eq!(
        capture.drain(),
        vec![vec!["[12:00]", "[label]", "[INFO]", "a", "b"]]
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prefix_is_not_rendered_for_filtered_calls() {
    let renders = Arc::new(AtomicUsize::new(0));
    let counted = renders.clone();
    let factory = build_console_logger(
        Config::new()
            .log_level(Level::Warn)
            .prefix(Prefix::new(move || {
                counted.fetch_add(1, Ordering::SeqCst);
                String::new()
            }))
            .hook(Arc::new(MemoryWriter::new()).hook()),
    );
    let log = factory.create("p");
    log.info(&[&"filtered"]);
    assert_eq!(renders.load(Ordering::SeqCst), 0);
    log.warn(&[&"kept"]);
    log.warn(&[&"kept"]);
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn hook_args_override_replaces_computed_args() {
    let capture = Arc::new(MemoryWriter::new());
    let writer = capture.writer();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_hook = seen.clone();
    let factory = build_console_logger(Config::new().hook(Hook::new(move |cx| {
        seen_by_hook.lock().unwrap().push(cx.args.to_vec());
        HookOutcome::with_args(["[custom-arg]"]).writer(writer.clone())
    })));
    factory.create("browser.test.rs").info(&[&"test"]);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![vec!["[browser.test.rs]", "[INFO]"]]
    );
    assert_eq!(capture.drain(), vec![vec!["[custom-arg]", "test"]]);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn writer_override_receives_the_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = calls.clone();
    let writer = Writer::new(move |args, payload| {
        assert_eq!(args.len(), 2);
        assert_eq!(payload.len(), 1);
        counted.fetch_add(1, Ordering::SeqCst);
    });
    let factory = build_console_logger(move || {
        let writer = writer.clone();
        Config::new()
            .log_level(Level::Debug)
            .hook(Hook::new(move |_| HookOutcome::with_writer(writer.clone())))
    });
    let log = factory.create("custom");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    log.debug(&[&"test"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn hook_is_skipped_for_filtered_calls() {
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let counted = hook_calls.clone();
    let factory = build_console_logger(Config::new().log_level(Level::Error).hook(Hook::new(
        move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            HookOutcome::with_writer(Writer::new(|_, _| {}))
        },
    )));
    let log = factory.create("h");
    log.warn(&[]);
    log.success(&[]);
    log.r(&[]);
    assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
    log.fail(&[]);
    assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn macros_forward_payload() {
    let capture = Arc::new(MemoryWriter::new());
    let factory =
        build_console_logger(Config::new().log_level(Level::Debug).hook(capture.hook()));
    let log = factory.create("m");
    let n = 7;
    lablog::debug!(log, "n =", n);
    lablog::e!(log);
    lablog::raw!(log, "plain", 1.5,);
    assert_eq!(
        capture.drain(),
        vec![
            vec!["[m]", "[DEBUG]", "n =", "7"],
            vec!["[m]", "[ERROR]"],
            vec!["plain", "1.5"],
        ]
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn default_writers_do_not_panic() {
    let factory = build_host_logger(Config::new().log_level(Level::Debug));
    let log = factory.create("test/module");
    log.debug(&[&lablog::colors::debug("test")]);
    log.d(&[&lablog::colors::c::d("test")]);
    log.info(&[&"test"]);
    log.success(&[&"test"]);
    log.warn(&[&"test"]);
    log.error(&[&"test"]);
    log.fail(&[&"test"]);
    log.raw(&[&"test"]);
    log.sub(":sub").debug(&[&"sub test"]);

    let prefixed = build_console_logger(
        Config::new()
            .log_level(Level::Debug)
            .prefix(lablog::timestamp_prefix()),
    );
    prefixed.create("test-prefix").debug(&[&"prefix test"]);
}

//wasm aborts on panic, so unwinding can only be observed natively
#[cfg(not(target_arch = "wasm32"))]
mod unwinding {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn panicking_hook_propagates() {
        let factory =
            build_console_logger(Config::new().hook(Hook::new(|_| panic!("hook failed"))));
        let log = factory.create("p");
        let result = catch_unwind(AssertUnwindSafe(|| log.info(&[&"x"])));
        assert!(result.is_err());
        //filtered calls never reach the hook
        log.debug(&[&"x"]);
    }

    #[test]
    fn panicking_source_propagates() {
        let factory = build_console_logger(|| -> Config { panic!("source failed") });
        let log = factory.create("p");
        let result = catch_unwind(AssertUnwindSafe(|| log.error(&[&"x"])));
        assert!(result.is_err());
    }

    #[test]
    fn panicking_prefix_skips_the_writer() {
        let capture = Arc::new(MemoryWriter::new());
        let factory = build_console_logger(
            Config::new()
                .prefix(Prefix::new(|| panic!("prefix failed")))
                .hook(capture.hook()),
        );
        let log = factory.create("p");
        let result = catch_unwind(AssertUnwindSafe(|| log.info(&[&"x"])));
        assert!(result.is_err());
        assert!(capture.is_empty());

        //the logger is still usable afterwards
        let ok = build_console_logger(Config::new().hook(capture.hook()));
        ok.create("p").info(&[&"x"]);
        assert_eq!(capture.len(), 1);
    }
}
