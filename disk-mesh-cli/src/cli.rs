use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use disk_mesh_core::{scatter::settings::ScatterSettings, Scalar};
use disk_mesh_image::settings::DiskColor;

#[derive(Clone, Debug, Parser)]
#[command(name = "disk-mesh", version, author, about)]
#[command(help_template = "\
{name} {version}
{about}
{author}

{usage-heading}
{tab}{usage}

{all-args}
")]
pub struct CliArgs {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Clone, Debug, Args)]
pub struct CommonArgs {
    /// Output file path
    #[arg(short, long, value_name = "PATH", value_hint(ValueHint::FilePath))]
    pub output: PathBuf,

    /// Display settings used and debug logs
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ScatterArgs {
    /// Number of placed points
    #[arg(long, value_name = "INTEGER", default_value_t = 100)]
    pub max_set_size: usize,

    /// Rendered disk diameter
    #[arg(long, value_name = "NUMBER", default_value_t = 10.0)]
    pub point_size: Scalar,

    /// Minimal distance between points, defaults to point size
    #[arg(long, value_name = "NUMBER")]
    pub points_separation: Option<Scalar>,

    /// Drawing surface width
    #[arg(long, value_name = "NUMBER", default_value_t = 500.0)]
    pub width: Scalar,

    /// Drawing surface height
    #[arg(long, value_name = "NUMBER", default_value_t = 500.0)]
    pub height: Scalar,

    /// Maximum number of tries when finding point to place
    #[arg(long, value_name = "INTEGER", default_value_t = 1000)]
    pub max_iterations: usize,

    /// Random generator seed
    ///
    /// Points differ on every run when omitted.
    #[arg(long, value_name = "INTEGER")]
    pub seed: Option<u64>,
}

impl From<&ScatterArgs> for ScatterSettings {
    fn from(value: &ScatterArgs) -> Self {
        Self {
            max_set_size: value.max_set_size,
            point_size: value.point_size,
            points_separation: value.points_separation.unwrap_or(value.point_size),
            width: value.width,
            height: value.height,
            max_iterations: value.max_iterations,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorChoice {
    #[default]
    Red,
    Random,
}

impl ColorChoice {
    pub fn into_disk_color(self, seed: u64) -> DiskColor {
        match self {
            Self::Red => DiskColor::default(),
            Self::Random => DiskColor::Random(seed),
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Produce random points
    #[command(help_template = "\
{name}
{about}

{usage-heading}
{tab}{usage}

{all-args}
")]
    Points {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        scatter: ScatterArgs,

        #[command(flatten)]
        format: PointsFormat,
    },

    /// Produce disk mesh
    #[command(help_template = "\
{name}
{about}

{usage-heading}
{tab}{usage}

{all-args}
")]
    Mesh {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        scatter: ScatterArgs,

        #[command(flatten)]
        format: MeshFormat,

        /// Points file path (JSON or YAML list of points)
        ///
        /// Points are scattered randomly when omitted.
        #[arg(short, long, value_name = "PATH", value_hint(ValueHint::FilePath))]
        input: Option<PathBuf>,

        /// Number of active points, defaults to all points
        #[arg(long, value_name = "INTEGER")]
        set_size: Option<usize>,

        /// Shift X of every point by its Y multiplied by this factor before sorting
        #[arg(long, value_name = "NUMBER", default_value_t = 0.0)]
        shear: Scalar,

        /// Disks color in PNG visualization
        #[arg(long, value_name = "COLOR", default_value_t)]
        color_choice: ColorChoice,
    },
}

#[derive(Clone, Debug, Args)]
#[group(required = true)]
pub struct PointsFormat {
    /// Produce JSON points
    #[arg(long)]
    pub json: bool,

    /// Produce pretty JSON points
    #[arg(long)]
    pub json_pretty: bool,

    /// Produce YAML points
    #[arg(long)]
    pub yaml: bool,
}

#[derive(Clone, Debug, Args)]
#[group(required = true)]
pub struct MeshFormat {
    /// Produce JSON mesh
    #[arg(long)]
    pub json: bool,

    /// Produce pretty JSON mesh
    #[arg(long)]
    pub json_pretty: bool,

    /// Produce YAML mesh
    #[arg(long)]
    pub yaml: bool,

    /// Produce OBJ mesh
    #[arg(long)]
    pub obj: bool,

    /// Produce PNG mesh visualization
    #[arg(long)]
    pub png: bool,
}
