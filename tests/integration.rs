// SPDX-License-Identifier: MPL-2.0
use splat_studio::app::{App, Flags, Message, Screen};
use splat_studio::application::port::SplatViewer;
use splat_studio::config::{self, Config};
use splat_studio::domain::scene::{SplatFormat, SplatKind};
use splat_studio::domain::upload::{ReconstructionMethod, SelectedVideo};
use splat_studio::error::SceneError;
use splat_studio::i18n::fluent::I18n;
use splat_studio::infrastructure::HeaderProbe;
use splat_studio::scene;
use splat_studio::ui::uploader;
use splat_studio::upload::{media_type, Submission, SubmissionSink};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    fn video_paths(&self) -> Vec<PathBuf> {
        self.received
            .lock()
            .expect("sink lock poisoned")
            .iter()
            .map(|s| s.video.path().to_path_buf())
            .collect()
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, submission: &Submission) {
        self.received
            .lock()
            .expect("sink lock poisoned")
            .push(submission.clone());
    }
}

fn gaussian_ply(vertices: u64, body_bytes: usize) -> Vec<u8> {
    let mut bytes = format!(
        "ply\n\
         format binary_little_endian 1.0\n\
         element vertex {vertices}\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property float f_dc_0\n\
         property float opacity\n\
         property float scale_0\n\
         property float rot_0\n\
         end_header\n"
    )
    .into_bytes();
    bytes.resize(bytes.len() + body_bytes, 0);
    bytes
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("failed to write fixture");
    path
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("upload-email-invalid"), "Veuillez saisir une adresse e-mail valide");
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[upload\nprogress_step = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn upload_pacing_comes_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[upload]\nprogress_interval_ms = 100\nprogress_step = 25\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut form = uploader::State::new(
        config.upload.progress_interval(),
        config.upload.progress_step(),
    );
    assert_eq!(form.progress_interval().as_millis(), 100);

    form.update(uploader::Message::FileSelected(SelectedVideo::new(
        PathBuf::from("clip.webm"),
        "video/webm",
        1,
    )));
    for _ in 0..4 {
        form.update(uploader::Message::ProgressTick);
    }
    assert!(form.upload_progress().is_complete());
    assert!(!form.is_uploading());
}

#[test]
fn picked_file_flows_through_the_form_to_the_sink() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let video_path = write(dir.path(), "capture.MOV", &[0_u8; 512]);

    let sink = Arc::new(RecordingSink::default());
    let (mut app, _task) = App::with_config(
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        },
        Config::default(),
        Arc::new(HeaderProbe),
        Arc::clone(&sink) as Arc<dyn SubmissionSink>,
    );

    let _ = app.update(Message::Uploader(uploader::Message::EmailChanged(
        "capture@studio.io".to_string(),
    )));
    let _ = app.update(Message::Uploader(uploader::Message::MethodSelected(
        ReconstructionMethod::Nerf,
    )));
    let inspected = media_type::inspect(video_path.clone());
    let _ = app.update(Message::FileInspected(inspected));

    let video = app.uploader().video().cloned().expect("video accepted");
    assert_eq!(video.media_type(), "video/quicktime");
    assert_eq!(video.size_bytes(), 512);

    for _ in 0..9 {
        let _ = app.update(Message::Uploader(uploader::Message::ProgressTick));
    }
    assert!(!app.uploader().is_submit_enabled());
    let _ = app.update(Message::Uploader(uploader::Message::ProgressTick));
    assert!(app.uploader().is_submit_enabled());

    let _ = app.update(Message::Uploader(uploader::Message::Submit));
    assert_eq!(sink.video_paths(), vec![video_path]);
    assert_eq!(app.uploader().email(), "");
    assert_eq!(app.uploader().live_previews(), 0);
}

#[test]
fn header_probe_accepts_gaussian_ply_and_splat_files() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let ply = write(dir.path(), "garden.ply", &gaussian_ply(3, 3 * 28));
    let scene = HeaderProbe.load_scene(&ply).expect("valid ply");
    assert_eq!(scene.format, SplatFormat::Ply);
    assert_eq!(scene.kind, SplatKind::Gaussians);
    assert_eq!(scene.splat_count, 3);

    let splat = write(dir.path(), "garden.splat", &[0_u8; 64]);
    let scene = HeaderProbe.load_scene(&splat).expect("valid splat");
    assert_eq!(scene.format, SplatFormat::Splat);
    assert_eq!(scene.splat_count, 2);
}

#[test]
fn header_probe_reports_load_errors() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let truncated = write(dir.path(), "short.ply", &gaussian_ply(3, 10));
    assert!(matches!(
        HeaderProbe.load_scene(&truncated),
        Err(SceneError::Truncated { .. })
    ));

    let missing = dir.path().join("missing.ply");
    assert_eq!(
        HeaderProbe.load_scene(&missing),
        Err(SceneError::NotFound(missing.clone()))
    );

    let unsupported = write(dir.path(), "mesh.obj", b"v 0 0 0\n");
    assert_eq!(
        HeaderProbe.load_scene(&unsupported),
        Err(SceneError::UnsupportedFormat("obj".to_string()))
    );
}

#[test]
fn scene_screen_runs_probed_asset_and_ignores_stale_loads() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let ply = write(dir.path(), "garden.ply", &gaussian_ply(2, 2 * 28));

    let (mut app, _task) = App::with_config(
        Flags {
            lang: Some("en-US".to_string()),
            scene_path: Some(ply.clone()),
            ..Flags::default()
        },
        Config::default(),
        Arc::new(HeaderProbe),
        Arc::new(RecordingSink::default()),
    );
    assert_eq!(app.screen(), Screen::Scene);

    let stale = app.scene().generation();
    let _ = app.update(Message::SwitchScreen(Screen::Upload));
    let _ = app.update(Message::SwitchScreen(Screen::Scene));

    // The load started before the screen switch arrives late
    let _ = app.update(Message::Scene(scene::Message::Loaded {
        generation: stale,
        result: HeaderProbe.load_scene(&ply),
    }));
    let status = app.scene().context().map(|c| c.viewer_status().clone());
    assert_eq!(status, Some(scene::ViewerStatus::Loading(ply.clone())));

    let current = app.scene().generation();
    let _ = app.update(Message::Scene(scene::Message::Loaded {
        generation: current,
        result: HeaderProbe.load_scene(&ply),
    }));
    assert!(matches!(
        app.scene().context().map(|c| c.viewer_status()),
        Some(scene::ViewerStatus::Running(loaded)) if loaded.splat_count == 2
    ));

    for _ in 0..3 {
        let _ = app.update(Message::Scene(scene::Message::Frame));
    }
    let frames = app.scene().context().map(scene::SceneContext::frames);
    assert_eq!(frames, Some(3));
}
