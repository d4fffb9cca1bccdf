use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;

use matrixpng::codec::{
    DecodeConfig, EncodeConfig, MatrixToPngPipeline, PngToMatrixPipeline, Scheme,
};
use matrixpng::logger;

#[derive(Parser)]
#[command(name = "matrixpng")]
#[command(about = "Store 2-D matrices as human-readable PNG files and recover them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a matrix file into a PNG image
    Encode {
        /// Input matrix file: one row per line, comma- or whitespace-separated
        matrix: PathBuf,

        /// Output PNG file path
        output: PathBuf,

        /// Colormap scheme: "grayscale" or "extended_black_body"
        #[arg(short, long, default_value = "extended_black_body")]
        scheme: String,

        /// Override the minimum of the value range (requires --z-max)
        #[arg(long)]
        z_min: Option<f64>,

        /// Override the maximum of the value range (requires --z-min)
        #[arg(long)]
        z_max: Option<f64>,

        /// Clamp values outside the overridden range instead of failing
        #[arg(long)]
        clamp: bool,

        /// Units label stored in the PNG alongside the value range
        #[arg(long)]
        z_units: Option<String>,

        /// Render matrix row 0 at the top of the image instead of the bottom
        #[arg(long)]
        y_ascend_down: bool,

        /// Transpose the matrix before encoding (for data indexed [x][y])
        #[arg(long)]
        transpose: bool,
    },
    /// Decode a matrix PNG back into a matrix file
    Decode {
        /// Input PNG file
        png: PathBuf,

        /// Output matrix file path
        output: PathBuf,

        /// Colormap scheme, when the PNG carries no "colormap" text chunk
        #[arg(short, long)]
        scheme: Option<String>,

        /// Value range minimum, when the PNG carries no "z_min" text chunk
        #[arg(long)]
        z_min: Option<f64>,

        /// Value range maximum, when the PNG carries no "z_max" text chunk
        #[arg(long)]
        z_max: Option<f64>,
    },
}

fn z_range(z_min: Option<f64>, z_max: Option<f64>) -> anyhow::Result<Option<(f64, f64)>> {
    match (z_min, z_max) {
        (Some(min), Some(max)) => Ok(Some((min, max))),
        (None, None) => Ok(None),
        _ => bail!("--z-min and --z-max must be given together"),
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            matrix,
            output,
            scheme,
            z_min,
            z_max,
            clamp,
            z_units,
            y_ascend_down,
            transpose,
        } => {
            let config = EncodeConfig::builder()
                .scheme(Scheme::from_name(&scheme)?)
                .z_range(z_range(z_min, z_max)?)
                .clamp_out_of_range(clamp)
                .z_units(z_units)
                .y_ascend_up(!y_ascend_down)
                .transpose(transpose)
                .build();

            let pipeline = MatrixToPngPipeline::new(config);
            pipeline.convert_file(&matrix, &output)?;
            info!("Encoded {} -> {}", matrix.display(), output.display());
        }
        Commands::Decode {
            png,
            output,
            scheme,
            z_min,
            z_max,
        } => {
            let mut builder = DecodeConfig::builder();
            if let Some(name) = &scheme {
                builder = builder.scheme(Scheme::from_name(name)?);
            }
            if let Some((min, max)) = z_range(z_min, z_max)? {
                builder = builder.z_range(min, max);
            }

            let pipeline = PngToMatrixPipeline::new(builder.build());
            pipeline.convert_file(&png, &output)?;
            info!("Decoded {} -> {}", png.display(), output.display());
        }
    }

    Ok(())
}
