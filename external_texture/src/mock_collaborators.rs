/// Mock collaborators for unit tests (no GPU or platform surface required)
///
/// Producer, context and canvas mocks share one call log so tests can assert
/// both which calls happened and in what order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use glam::Mat3;
use crate::config::ImageDesc;
use crate::error::{Error, Result};
use crate::log::{Logger, LogEntry};
use crate::render::{Canvas, DrawImageRect, GpuContext, GpuImage, ImageInfo, TextureSlot};
use crate::surface::{SurfaceHandle, SurfaceProducer};

/// Shared, ordered record of collaborator calls
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn clear_calls(log: &CallLog) {
    log.lock().unwrap().clear();
}

// ============================================================================
// Capturing Logger
// ============================================================================

pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturingLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// Mock Surface Producer
// ============================================================================

pub struct MockSurfaceProducer {
    pub calls: CallLog,
    transform: Mutex<Mat3>,
    fail_attach: AtomicBool,
    fail_detach: AtomicBool,
    fail_update: AtomicBool,
    fail_as_backend: AtomicBool,
}

impl MockSurfaceProducer {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            transform: Mutex::new(Mat3::IDENTITY),
            fail_attach: AtomicBool::new(false),
            fail_detach: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_as_backend: AtomicBool::new(false),
        }
    }

    pub fn set_transform(&self, transform: Mat3) {
        *self.transform.lock().unwrap() = transform;
    }

    pub fn set_fail_attach(&self, fail: bool) {
        self.fail_attach.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_detach(&self, fail: bool) {
        self.fail_detach.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    /// Report failures as `BackendError`, like a platform bridge that throws
    pub fn set_fail_as_backend(&self, backend: bool) {
        self.fail_as_backend.store(backend, Ordering::SeqCst);
    }

    fn failure(&self, message: &str) -> Error {
        if self.fail_as_backend.load(Ordering::SeqCst) {
            Error::BackendError(message.to_string())
        } else {
            Error::ProducerError(message.to_string())
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SurfaceProducer for MockSurfaceProducer {
    fn attach_to_context(&self, surface: SurfaceHandle, slot: TextureSlot) -> Result<()> {
        self.record(format!("attach({}, {})", surface, slot));
        if self.fail_attach.load(Ordering::SeqCst) {
            return Err(self.failure("attach rejected"));
        }
        Ok(())
    }

    fn detach_from_context(&self, surface: SurfaceHandle) -> Result<()> {
        self.record(format!("detach({})", surface));
        if self.fail_detach.load(Ordering::SeqCst) {
            return Err(self.failure("detach rejected"));
        }
        Ok(())
    }

    fn update_content(&self, surface: SurfaceHandle) -> Result<()> {
        self.record(format!("update({})", surface));
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(self.failure("update rejected"));
        }
        Ok(())
    }

    fn lookup_transform(&self, surface: SurfaceHandle) -> Mat3 {
        self.record(format!("transform({})", surface));
        *self.transform.lock().unwrap()
    }
}

// ============================================================================
// Mock GPU Image
// ============================================================================

#[derive(Debug)]
pub struct MockGpuImage {
    pub info: ImageInfo,
}

impl MockGpuImage {
    pub fn new(info: ImageInfo) -> Self {
        Self { info }
    }
}

impl GpuImage for MockGpuImage {
    fn info(&self) -> &ImageInfo {
        &self.info
    }
}

// ============================================================================
// Mock GPU Context
// ============================================================================

pub struct MockGpuContext {
    pub calls: CallLog,
    pub next_slot: u32,
    pub live_slots: Vec<TextureSlot>,
    pub wraps: u32,
    pub wrap_returns_none: bool,
    pub fail_create: bool,
    pub fail_wrap: bool,
}

impl MockGpuContext {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            next_slot: 1,
            live_slots: Vec::new(),
            wraps: 0,
            wrap_returns_none: false,
            fail_create: false,
            fail_wrap: false,
        }
    }
}

impl GpuContext for MockGpuContext {
    fn create_texture_slot(&mut self) -> Result<TextureSlot> {
        if self.fail_create {
            self.calls.lock().unwrap().push("create_slot failed".to_string());
            return Err(Error::BackendError("out of texture names".to_string()));
        }
        let slot = TextureSlot(self.next_slot);
        self.next_slot += 1;
        self.live_slots.push(slot);
        self.calls.lock().unwrap().push(format!("create_slot -> {}", slot));
        Ok(slot)
    }

    fn delete_texture_slot(&mut self, slot: TextureSlot) {
        self.live_slots.retain(|s| *s != slot);
        self.calls.lock().unwrap().push(format!("delete_slot({})", slot));
    }

    fn wrap_texture_slot(
        &mut self,
        slot: TextureSlot,
        desc: &ImageDesc,
    ) -> Result<Option<Arc<dyn GpuImage>>> {
        self.calls.lock().unwrap().push(format!("wrap({})", slot));
        if self.fail_wrap {
            return Err(Error::BackendError("borrow rejected".to_string()));
        }
        if self.wrap_returns_none {
            return Ok(None);
        }
        self.wraps += 1;
        Ok(Some(Arc::new(MockGpuImage {
            info: ImageInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                origin: desc.origin,
            },
        })))
    }
}

// ============================================================================
// Mock Canvas
// ============================================================================

pub struct MockCanvas {
    pub calls: CallLog,
    pub draws: Vec<DrawImageRect>,
}

impl MockCanvas {
    pub fn new(calls: CallLog) -> Self {
        Self { calls, draws: Vec::new() }
    }
}

impl Canvas for MockCanvas {
    fn draw_image_rect(&mut self, cmd: &DrawImageRect) -> Result<()> {
        self.calls.lock().unwrap().push(format!(
            "draw({},{},{},{})",
            cmd.dst.x, cmd.dst.y, cmd.dst.width, cmd.dst.height
        ));
        self.draws.push(cmd.clone());
        Ok(())
    }
}
