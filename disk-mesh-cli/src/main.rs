mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Action, CliArgs, MeshFormat, PointsFormat, ScatterArgs};
use disk_mesh_core::{
    coord::Coord,
    mesh::DiskMesh,
    scatter::{active_points, scatter_points, settings::ScatterSettings, shear_x},
    Scalar,
};
use disk_mesh_image::{generate_disk_mesh_image, settings::GenerateDiskImageSettings};
use obj_exporter::{Geometry, ObjSet, Object, Primitive, Shape, TVertex, Vertex};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{fs::write, path::Path};
use tracing::Level;

fn main() -> Result<()> {
    run_app(CliArgs::parse())
}

fn run_app(args: CliArgs) -> Result<()> {
    match args.action {
        Action::Points {
            common,
            scatter,
            format,
        } => {
            init_logging(common.verbose);
            let points = scatter_from_args(&scatter)?;
            write_points(&points, &format, &common.output)?;
            tracing::info!(points = points.len(), output = ?common.output, "points saved");
            Ok(())
        }
        Action::Mesh {
            common,
            scatter,
            format,
            input,
            set_size,
            shear,
            color_choice,
        } => {
            init_logging(common.verbose);
            let points = match &input {
                Some(input) => read_points(input)?,
                None => scatter_from_args(&scatter)?,
            };
            let set_size = set_size.unwrap_or(points.len());
            let mut points = active_points(&points, set_size)?.to_vec();
            if shear != 0.0 {
                shear_x(&mut points, shear);
            }
            let mesh = DiskMesh::generate(&points).context("Cannot produce disk mesh")?;
            tracing::info!(
                points = mesh.points.len(),
                triangles = mesh.triangles.len(),
                "mesh generated"
            );
            if format.json {
                let contents =
                    serde_json::to_string(&mesh).context("Could not serialize JSON mesh")?;
                write(&common.output, contents).context("Could not save mesh file")?;
            } else if format.json_pretty {
                let contents = serde_json::to_string_pretty(&mesh)
                    .context("Could not serialize pretty JSON mesh")?;
                write(&common.output, contents).context("Could not save mesh file")?;
            } else if format.yaml {
                let contents =
                    serde_yaml::to_string(&mesh).context("Could not serialize YAML mesh")?;
                write(&common.output, contents).context("Could not save mesh file")?;
            } else if format.obj {
                write_obj(&mesh, scatter.width, scatter.height, &common.output)?;
            } else if format.png {
                let seed = scatter.seed.unwrap_or(0);
                let settings = GenerateDiskImageSettings {
                    width: scatter.width.ceil().max(1.0) as u32,
                    height: scatter.height.ceil().max(1.0) as u32,
                    point_size: scatter.point_size,
                    disk_color: color_choice.into_disk_color(seed),
                    ..Default::default()
                };
                tracing::debug!(?settings, "image settings");
                generate_disk_mesh_image(&mesh, &settings)
                    .save(&common.output)
                    .context("Cannot save output image")?;
            }
            tracing::info!(output = ?common.output, ?format, "mesh saved");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Tests run several commands in one process, only the first one installs subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

fn scatter_from_args(args: &ScatterArgs) -> Result<Vec<Coord>> {
    let settings = ScatterSettings::from(args);
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(?settings, seed, "scatter settings");
    let mut rng = StdRng::seed_from_u64(seed);
    scatter_points(&settings, &mut rng).context("Cannot scatter points")
}

fn read_points(path: &Path) -> Result<Vec<Coord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read points file: {:?}", path))?;
    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);
    let points = if is_yaml {
        serde_yaml::from_str(&contents).context("Could not deserialize YAML points")?
    } else {
        serde_json::from_str(&contents).context("Could not deserialize JSON points")?
    };
    Ok(points)
}

fn write_points(points: &[Coord], format: &PointsFormat, output: &Path) -> Result<()> {
    let contents = if format.json {
        serde_json::to_string(points).context("Could not serialize JSON points")?
    } else if format.json_pretty {
        serde_json::to_string_pretty(points).context("Could not serialize pretty JSON points")?
    } else if format.yaml {
        serde_yaml::to_string(points).context("Could not serialize YAML points")?
    } else {
        return Err(anyhow!("No output format selected"));
    };
    write(output, contents).context("Could not save points file")
}

fn write_obj(mesh: &DiskMesh, width: Scalar, height: Scalar, output: &Path) -> Result<()> {
    let indices = mesh
        .indexed_triangles()
        .ok_or_else(|| anyhow!("Triangle vertex is missing from mesh points"))?;
    let object = Object {
        name: "mesh".to_owned(),
        vertices: mesh
            .points
            .iter()
            .map(|p| Vertex {
                x: p.x as _,
                y: p.y as _,
                z: 0.0,
            })
            .collect::<Vec<_>>(),
        tex_vertices: mesh
            .points
            .iter()
            .map(|p| TVertex {
                u: p.x as f64 / width as f64,
                v: p.y as f64 / height as f64,
                w: 0.0,
            })
            .collect::<Vec<_>>(),
        normals: vec![Vertex {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }],
        geometry: vec![Geometry {
            material_name: None,
            shapes: indices
                .into_iter()
                .map(|[a, b, c]| Shape {
                    primitive: Primitive::Triangle(
                        (a, Some(a), Some(0)),
                        (b, Some(b), Some(0)),
                        (c, Some(c), Some(0)),
                    ),
                    groups: vec![],
                    smoothing_groups: vec![],
                })
                .collect::<Vec<_>>(),
        }],
    };
    let objects = ObjSet {
        material_library: None,
        objects: vec![object],
    };
    obj_exporter::export_to_file(&objects, output).context("Cannot save mesh file")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<()> {
        let mut all = vec!["disk-mesh"];
        all.extend_from_slice(args);
        run_app(CliArgs::try_parse_from(all)?)
    }

    #[test]
    fn test_points_and_mesh() {
        let dir = tempfile::tempdir().expect("Cannot create temp dir");
        let points = dir.path().join("points.json");
        let points = points.to_str().unwrap();
        run(&["points", "-o", points, "--json", "--max-set-size", "30", "--seed", "5"])
            .expect("Cannot produce points");
        let stored = read_points(Path::new(points)).unwrap();
        assert_eq!(stored.len(), 30);

        let mesh = dir.path().join("mesh.json");
        let mesh = mesh.to_str().unwrap();
        run(&["mesh", "-i", points, "-o", mesh, "--json", "--set-size", "12"])
            .expect("Cannot produce mesh");
        let mesh: DiskMesh =
            serde_json::from_str(&std::fs::read_to_string(mesh).unwrap()).unwrap();
        assert_eq!(mesh.points.len(), 12);
        assert!(!mesh.triangles.is_empty());
        assert!(mesh.points.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn test_mesh_formats() {
        let dir = tempfile::tempdir().expect("Cannot create temp dir");
        for (name, flag) in [
            ("mesh.pretty.json", "--json-pretty"),
            ("mesh.yaml", "--yaml"),
            ("mesh.obj", "--obj"),
            ("mesh.png", "--png"),
        ] {
            let output = dir.path().join(name);
            run(&[
                "mesh",
                "-o",
                output.to_str().unwrap(),
                flag,
                "--seed",
                "11",
                "--max-set-size",
                "40",
                "--width",
                "200",
                "--height",
                "120",
                "--color-choice",
                "random",
            ])
            .expect("Cannot produce mesh");
            assert!(output.exists(), "missing {}", name);
        }
        let image = image::open(dir.path().join("mesh.png")).unwrap();
        assert_eq!((image.width(), image.height()), (200, 120));
        let yaml = std::fs::read_to_string(dir.path().join("mesh.yaml")).unwrap();
        let mesh: DiskMesh = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(mesh.points.len(), 40);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().expect("Cannot create temp dir");
        let output = dir.path().join("mesh.json");
        let output = output.to_str().unwrap();
        assert!(run(&["mesh", "-o", output, "--json", "--seed", "1", "--set-size", "101"]).is_err());
        assert!(run(&["mesh", "-o", output, "--json", "--seed", "1", "--set-size", "2"]).is_err());
        assert!(run(&["mesh", "-o", output, "--seed", "1"]).is_err());
        assert!(!Path::new(output).exists());
    }
}
