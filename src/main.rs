//! Wobble - Multi-output LFO modulation engine for software synthesizers

use anyhow::Result;
use clap::Parser;
use cpal::traits::{DeviceTrait, HostTrait};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wobble::config;
use wobble::engine::{Engine, Player, Recorder};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { config: config_path } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;

            println!("Starting Wobble...");
            println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
            println!("  LFO: {:?} {:?} at {} Hz", cfg.lfo.waveform, cfg.lfo.mode, cfg.lfo.frequency_hz);
            println!("  Notes: {}", cfg.notes.len());

            let device_name = cfg.audio.device.clone();
            let engine = Arc::new(Mutex::new(Engine::new(cfg)));

            let mut player = Player::new();
            player.start(engine.clone(), device_name.as_deref())?;

            let running = Arc::new(AtomicBool::new(true));
            let r = running.clone();
            ctrlc::set_handler(move || {
                r.store(false, Ordering::SeqCst);
            })?;

            println!("\nPlaying. Press Ctrl+C to stop.");
            while running.load(Ordering::SeqCst) {
                let done = engine.lock().map(|e| !e.has_work()).unwrap_or(true);
                if done {
                    break;
                }
                std::thread::sleep(Duration::from_millis(100));
            }

            player.stop();
            println!("Stopped.");
        }

        Commands::Record {
            config: config_path,
            output,
            duration,
        } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;

            println!("Recording {} seconds to {:?}...", duration, output);

            let sample_rate = cfg.audio.sample_rate;
            let mut engine = Engine::new(cfg);
            let total_samples = (u64::from(sample_rate) * duration) as usize;

            let mut recorder = Recorder::new(&output, sample_rate)?;

            for i in 0..total_samples {
                let sample = engine.process() as f32;
                recorder.write_buffer(&[sample])?;

                // Progress update every second
                if i % (sample_rate as usize) == 0 {
                    print!(
                        "\r  Progress: {}s / {}s",
                        i / sample_rate as usize,
                        duration
                    );
                    use std::io::Write;
                    std::io::stdout().flush()?;
                }
            }

            recorder.finalize()?;
            println!("\nRecorded to {:?}", output);
        }

        Commands::Render {
            config: config_path,
            output,
            duration,
        } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;

            println!("Rendering {} seconds of LFO channels to {:?}...", duration, output);
            println!("  Channel order: normal, inverted, quad, quad inverted,");
            println!("                 unipolar from max, unipolar from min");

            let sample_rate = cfg.audio.sample_rate;
            let mut engine = Engine::new(cfg);
            let total_samples = u64::from(sample_rate) * duration;

            let mut recorder = Recorder::with_channels(&output, sample_rate, 6)?;

            for _ in 0..total_samples {
                let m = engine.render_modulation();
                recorder.write_frame(&[
                    m.normal as f32,
                    m.inverted as f32,
                    m.quad_phase as f32,
                    m.quad_phase_inverted as f32,
                    m.unipolar_from_max as f32,
                    m.unipolar_from_min as f32,
                ])?;
            }

            recorder.finalize()?;
            println!("Rendered to {:?}", output);
        }

        Commands::Devices => {
            println!("Available audio devices:\n");

            let host = cpal::default_host();

            if let Some(device) = host.default_output_device() {
                println!("Default output: {}", device.name().unwrap_or_default());
                if let Ok(config) = device.default_output_config() {
                    println!(
                        "  Sample rate: {} Hz, Channels: {}",
                        config.sample_rate().0,
                        config.channels()
                    );
                }
                println!();
            }

            println!("Output devices:");
            let devices = wobble::engine::list_output_devices();
            if devices.is_empty() {
                println!("  (none found)");
            }
            for (name, config) in devices {
                println!(
                    "  - {} ({} Hz, {} ch)",
                    name, config.sample_rate.0, config.channels
                );
            }
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
                    println!("  Buffer size: {}", cfg.audio.buffer_size);
                    println!("  LFO waveform: {:?}", cfg.lfo.waveform);
                    println!("  LFO mode: {:?}", cfg.lfo.mode);
                    println!("  LFO frequency: {} Hz", cfg.lfo.frequency_hz);
                    println!("  LFO amplitude: {:.2}", cfg.lfo.amplitude);
                    println!("  LFO delay: {} ms, ramp: {} ms", cfg.lfo.delay_ms, cfg.lfo.ramp_ms);
                    println!("  Notes: {}", cfg.notes.len());
                    for note in &cfg.notes {
                        println!(
                            "    - note {} vel {} at {:.2}s for {:.2}s",
                            note.note, note.velocity, note.at, note.duration
                        );
                    }
                }
                Err(e) => {
                    println!("Configuration is invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let example_config = include_str!("../wobble.example.yaml");

            let path = "wobble.yaml";
            if std::path::Path::new(path).exists() {
                println!("wobble.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created wobble.yaml with example configuration.");
            }
        }
    }

    Ok(())
}
