use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::{vec::Vec, UniformRand};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::fs::File;
use std::io::{self, BufReader, Read};

use crate::consts::{FIELD_ELEMENTS_PER_CELL, FIELD_ELEMENTS_PER_EXT_BLOB};
use crate::errors::KzgError;
use crate::traits::ReadPointFromBytes;

/// Minimum number of G1 monomial points the cell-proof pipeline needs.
pub const MIN_G1_POINTS: usize = FIELD_ELEMENTS_PER_EXT_BLOB;

/// Minimum number of G2 monomial points: enough to commit to a vanishing
/// polynomial of degree `FIELD_ELEMENTS_PER_CELL`.
pub const MIN_G2_POINTS: usize = FIELD_ELEMENTS_PER_CELL + 1;

/// The Structured Reference String used for commitments, opening proofs and
/// verification.
///
/// Both bases are in monomial form: `g1_monomial[i] = tau^i * G1` and
/// `g2_monomial[i] = tau^i * G2` for the setup secret `tau`. Loaded once at
/// startup and shared read-only afterwards.
#[derive(Debug, PartialEq, Clone)]
pub struct SRS {
    pub g1_monomial: Vec<G1Affine>,
    pub g2_monomial: Vec<G2Affine>,
}

impl SRS {
    /// Wraps already-validated points, checking only that enough of them
    /// were supplied.
    pub fn new(g1_monomial: Vec<G1Affine>, g2_monomial: Vec<G2Affine>) -> Result<Self, KzgError> {
        if g1_monomial.len() < MIN_G1_POINTS || g2_monomial.len() < MIN_G2_POINTS {
            return Err(KzgError::InvalidInputLength);
        }
        Ok(Self {
            g1_monomial,
            g2_monomial,
        })
    }

    /// Initializes the SRS by loading compressed big-endian G1 and G2 points
    /// from the given files. Exactly the minimum point counts are read; the
    /// files may be longer.
    pub fn from_files(path_to_g1_points: &str, path_to_g2_points: &str) -> Result<Self, KzgError> {
        let g1_monomial =
            parallel_read_points::<G1Affine>(path_to_g1_points.to_owned(), MIN_G1_POINTS)?;
        let g2_monomial =
            parallel_read_points::<G2Affine>(path_to_g2_points.to_owned(), MIN_G2_POINTS)?;
        Self::new(g1_monomial, g2_monomial)
    }

    /// Derives a setup from a locally sampled secret. The secret is known to
    /// whoever runs this process, so the result is useless for production;
    /// it exists for tests and benches that need a structurally valid SRS
    /// without shipping a ceremony file.
    pub fn insecure_random_setup<R: rand::Rng>(rng: &mut R) -> Self {
        let tau = Fr::rand(rng);

        let mut g1 = Vec::with_capacity(MIN_G1_POINTS);
        let mut current = G1Projective::from(G1Affine::generator());
        for _ in 0..MIN_G1_POINTS {
            g1.push(current);
            current *= tau;
        }

        let mut g2 = Vec::with_capacity(MIN_G2_POINTS);
        let mut current = G2Projective::from(G2Affine::generator());
        for _ in 0..MIN_G2_POINTS {
            g2.push(current);
            current *= tau;
        }

        Self {
            g1_monomial: G1Projective::normalize_batch(&g1),
            g2_monomial: G2Projective::normalize_batch(&g2),
        }
    }
}

/// Reads points in parallel: one reader thread fans serialized chunks out to
/// one worker per cpu, workers parse them into affine points, and the main
/// thread reassembles everything in file order.
fn parallel_read_points<T: ReadPointFromBytes>(
    file_path: String,
    points_to_load: usize,
) -> Result<Vec<T>, KzgError> {
    let (sender, receiver) = bounded::<(Vec<u8>, usize)>(1000);

    let point_size = T::POINT_SIZE;
    let reader_handle = std::thread::spawn(move || -> io::Result<()> {
        read_file_chunks(&file_path, sender, point_size, points_to_load)
    });

    let num_workers = num_cpus::get();
    let workers: Vec<_> = (0..num_workers)
        .map(|_| {
            let receiver = receiver.clone();
            std::thread::spawn(move || process_chunks::<T>(receiver))
        })
        .collect();
    // Only the workers may keep the channel open; holding this clone would
    // leave the reader blocked if every worker bailed out early.
    drop(receiver);

    match reader_handle.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(KzgError::GenericError(e.to_string())),
        Err(_) => {
            return Err(KzgError::GenericError(
                "SRS reader thread panicked".to_string(),
            ))
        }
    }

    let mut all_points = Vec::new();
    for worker in workers {
        let points = worker
            .join()
            .map_err(|_| KzgError::GenericError("SRS worker thread panicked".to_string()))??;
        all_points.extend(points);
    }

    // Restore file order; the workers drained the channel concurrently.
    all_points.sort_by_key(|&(_, position)| position);

    if all_points.len() != points_to_load {
        return Err(KzgError::GenericError(format!(
            "expected {} setup points, found {}",
            points_to_load,
            all_points.len()
        )));
    }

    Ok(all_points.into_iter().map(|(point, _)| point).collect())
}

fn process_chunks<T: ReadPointFromBytes>(
    receiver: Receiver<(Vec<u8>, usize)>,
) -> Result<Vec<(T, usize)>, KzgError> {
    receiver
        .iter()
        .map(|(chunk, position)| T::read_point_from_bytes_be(&chunk).map(|point| (point, position)))
        .collect()
}

fn read_file_chunks(
    file_path: &str,
    sender: Sender<(Vec<u8>, usize)>,
    point_size: usize,
    num_points: usize,
) -> io::Result<()> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; point_size];

    for position in 0..num_points {
        reader.read_exact(&mut buffer)?;
        sender
            .send((buffer.clone(), position))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "worker channel closed"))?;
    }
    Ok(())
}
