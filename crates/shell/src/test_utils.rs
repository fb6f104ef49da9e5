//! Renderer double for shell tests

use std::sync::{Arc, Mutex};

use crate::bridge::ScrollBridge;
use crate::renderer::{PageLifecycle, Renderer};

/// A call the shell made on the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererCall {
    Load(String),
    Back,
    Forward,
    Reload,
    ScriptEnabled(bool),
    Evaluate(String),
    Bridge(String),
}

/// Records calls and keeps the registered callbacks so tests can fire them
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<RendererCall>>>,
    pub lifecycle: Arc<Mutex<Option<Box<dyn PageLifecycle>>>>,
    pub bridge: Arc<Mutex<Option<ScrollBridge>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RendererCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fire_started(&self, url: &str) {
        self.lifecycle.lock().unwrap().as_ref().unwrap().on_started(url);
    }

    pub fn fire_finished(&self, url: &str) {
        self.lifecycle.lock().unwrap().as_ref().unwrap().on_finished(url);
    }

    pub fn bridge(&self) -> ScrollBridge {
        self.bridge.lock().unwrap().clone().unwrap()
    }

    fn record(&self, call: RendererCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Renderer for RecordingRenderer {
    fn load_url(&mut self, url: &str) {
        self.record(RendererCall::Load(url.to_string()));
    }

    fn go_back(&mut self) {
        self.record(RendererCall::Back);
    }

    fn go_forward(&mut self) {
        self.record(RendererCall::Forward);
    }

    fn reload(&mut self) {
        self.record(RendererCall::Reload);
    }

    fn set_script_enabled(&mut self, enabled: bool) {
        self.record(RendererCall::ScriptEnabled(enabled));
    }

    fn evaluate_script(&mut self, source: &str) {
        self.record(RendererCall::Evaluate(source.to_string()));
    }

    fn set_lifecycle(&mut self, lifecycle: Box<dyn PageLifecycle>) {
        *self.lifecycle.lock().unwrap() = Some(lifecycle);
    }

    fn add_script_bridge(&mut self, name: &str, bridge: ScrollBridge) {
        self.record(RendererCall::Bridge(name.to_string()));
        *self.bridge.lock().unwrap() = Some(bridge);
    }
}
