// SPDX-License-Identifier: MPL-2.0
//! Headless payload builder.
//!
//! Builds the exact request payloads the editor would send, from files on
//! disk, so they can be inspected without a UI.

use magic_edit::config;
use magic_edit::domain::editing::{expansion, ExpansionSteps, PlacementField, PlacementTransform};
use magic_edit::domain::media::RasterImage;
use magic_edit::error::{Error, Result, ValidationError};
use magic_edit::media::{codec, crop, expansion as canvas, placement};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
magic-edit: build generation payloads from image files

USAGE:
  magic-edit expand <IMAGE> [--top N] [--right N] [--bottom N] [--left N] [--step PX] [--out FILE]
                   (each edge step counts as one press against max_expansion_clicks)
  magic-edit place <BASE> <OBJECT> [--x PCT] [--y PCT] [--scale PCT] [--rotation DEG]
                   [--tilt-x DEG] [--tilt-y DEG] [--opacity PCT]
                   [--composite-out FILE] [--mask-out FILE]
  magic-edit crop <IMAGE> --x PX --y PX --width PX --height PX [--out FILE]

Set RUST_LOG=debug for details.
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let outcome = match args.subcommand() {
        Ok(Some(command)) => match command.as_str() {
            "expand" => run_expand(args),
            "place" => run_place(args),
            "crop" => run_crop(args),
            other => Err(Error::Config(format!("unknown command '{other}'"))),
        },
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::FAILURE;
        }
        Err(err) => Err(Error::Config(err.to_string())),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn arg_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}

fn free_path(args: &mut pico_args::Arguments) -> Result<PathBuf> {
    args.free_from_str().map_err(arg_error)
}

fn reject_leftovers(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!("unexpected arguments: {rest:?}")))
    }
}

fn load_image(path: &Path) -> Result<RasterImage> {
    let bytes = std::fs::read(path)?;
    let mime_type = image_rs::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");
    let file_name = path.file_name().and_then(|name| name.to_str());
    codec::decode_upload(&bytes, mime_type, file_name)
}

fn write_image(image: &RasterImage, path: &Path, jpeg_quality: u8) -> Result<()> {
    let bytes = codec::encode(image, jpeg_quality)?;
    std::fs::write(path, &bytes)?;
    log::info!(
        "Wrote {} ({}x{}, {} bytes)",
        path.display(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(())
}

fn default_output(input: &Path, suffix: &str, image: &RasterImage) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    input.with_file_name(format!(
        "{stem}-{suffix}.{}",
        image.encoding().extension()
    ))
}

fn run_expand(mut args: pico_args::Arguments) -> Result<()> {
    let settings = config::load()?.editor_settings();
    let steps = ExpansionSteps {
        top: args.opt_value_from_str("--top").map_err(arg_error)?.unwrap_or(0),
        right: args.opt_value_from_str("--right").map_err(arg_error)?.unwrap_or(0),
        bottom: args.opt_value_from_str("--bottom").map_err(arg_error)?.unwrap_or(0),
        left: args.opt_value_from_str("--left").map_err(arg_error)?.unwrap_or(0),
    };
    let step: Option<u32> = args.opt_value_from_str("--step").map_err(arg_error)?;
    let out: Option<PathBuf> = args.opt_value_from_str("--out").map_err(arg_error)?;
    let input = free_path(&mut args)?;
    reject_leftovers(args)?;

    if steps.is_empty() {
        return Err(ValidationError::NoExpansion.into());
    }
    // Only edge steps can be given here, one press each; diagonal buttons
    // have no flag, so the edge-step total is the press count.
    if steps.total() as usize > settings.max_expansion_clicks {
        return Err(ValidationError::ExpansionLimitReached {
            max_clicks: settings.max_expansion_clicks,
        }
        .into());
    }

    let image = load_image(&input)?;
    let step = step.unwrap_or_else(|| {
        expansion::step_for(image.width(), image.height(), settings.expansion_step_ratio)
    });
    let expanded = canvas::build_expansion_canvas(&image, &steps, step)?;
    let out = out.unwrap_or_else(|| default_output(&input, "expanded", &expanded));
    write_image(&expanded, &out, settings.jpeg_quality)
}

fn run_place(mut args: pico_args::Arguments) -> Result<()> {
    let settings = config::load()?.editor_settings();
    let x: Option<f32> = args.opt_value_from_str("--x").map_err(arg_error)?;
    let y: Option<f32> = args.opt_value_from_str("--y").map_err(arg_error)?;

    let mut transform = PlacementTransform::default();
    for (flag, field) in [
        ("--scale", PlacementField::Scale),
        ("--rotation", PlacementField::Rotation),
        ("--tilt-x", PlacementField::TiltX),
        ("--tilt-y", PlacementField::TiltY),
        ("--opacity", PlacementField::Opacity),
    ] {
        if let Some(value) = args.opt_value_from_str::<_, f32>(flag).map_err(arg_error)? {
            transform = transform.with_field(field, value);
        }
    }
    transform = transform.with_position(
        x.unwrap_or(transform.position_x.value()),
        y.unwrap_or(transform.position_y.value()),
    );

    let composite_out: Option<PathBuf> =
        args.opt_value_from_str("--composite-out").map_err(arg_error)?;
    let mask_out: Option<PathBuf> = args.opt_value_from_str("--mask-out").map_err(arg_error)?;
    let base_path = free_path(&mut args)?;
    let object_path = free_path(&mut args)?;
    reject_leftovers(args)?;

    let base = load_image(&base_path)?;
    let object = load_image(&object_path)?;
    let render = placement::render_placement(&base, &object, &transform)?;

    let composite_out =
        composite_out.unwrap_or_else(|| default_output(&base_path, "composite", &render.composite));
    write_image(&render.composite, &composite_out, settings.jpeg_quality)?;

    let mask = render.mask.to_raster();
    let mask_out = mask_out.unwrap_or_else(|| default_output(&base_path, "placement-mask", &mask));
    write_image(&mask, &mask_out, settings.jpeg_quality)
}

fn run_crop(mut args: pico_args::Arguments) -> Result<()> {
    let settings = config::load()?.editor_settings();
    let rect = crop::CropRect {
        x: args.value_from_str("--x").map_err(arg_error)?,
        y: args.value_from_str("--y").map_err(arg_error)?,
        width: args.value_from_str("--width").map_err(arg_error)?,
        height: args.value_from_str("--height").map_err(arg_error)?,
    };
    let out: Option<PathBuf> = args.opt_value_from_str("--out").map_err(arg_error)?;
    let input = free_path(&mut args)?;
    reject_leftovers(args)?;

    if (rect.width as f32) < settings.min_crop_selection_px
        || (rect.height as f32) < settings.min_crop_selection_px
    {
        return Err(ValidationError::NoCropSelection.into());
    }

    let image = load_image(&input)?;
    let cropped = crop::crop_raster(&image, rect)?;
    let out = out.unwrap_or_else(|| default_output(&input, "cropped", &cropped));
    write_image(&cropped, &out, settings.jpeg_quality)
}
