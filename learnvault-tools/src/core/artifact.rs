// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! An artifact is the JSON file a Solidity toolchain writes for each compiled contract. Both the
//! Hardhat layout (`artifacts/contracts/Name.sol/Name.json` with a hex string `bytecode`) and the
//! Foundry layout (`out/Name.sol/Name.json` with `bytecode.object`) are supported.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{JsonAbi, Param},
    primitives::Bytes,
};
use serde::Deserialize;

use crate::core::{configuration::TransactionError, deployment::DeploymentError};

/// A contract type that can be deployed: its ABI plus creation bytecode.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

#[derive(Deserialize)]
struct ArtifactJson {
    abi: JsonAbi,
    bytecode: BytecodeJson,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BytecodeJson {
    Hex(Bytes),
    Object { object: Bytes },
}

impl From<BytecodeJson> for Bytes {
    fn from(bytecode: BytecodeJson) -> Self {
        match bytecode {
            BytecodeJson::Hex(bytes) | BytecodeJson::Object { object: bytes } => bytes,
        }
    }
}

impl ContractArtifact {
    pub fn new(name: impl Into<String>, abi: JsonAbi, bytecode: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode: bytecode.into(),
        }
    }

    /// Finds the artifact for contract `name` anywhere below `dir`.
    pub fn find(dir: impl AsRef<Path>, name: &str) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();
        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(&dir.to_string_lossy()),
            glob::Pattern::escape(name)
        );
        let mut matches = glob::glob(&pattern)
            .map_err(|err| ArtifactError::Pattern(err.to_string()))?
            .collect::<Result<Vec<PathBuf>, _>>()
            .map_err(|err| ArtifactError::Io(err.into_error()))?;
        match matches.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_owned(),
                dir: dir.to_owned(),
            }),
            1 => Self::from_file(name, matches.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                paths: matches,
            }),
        }
    }

    /// Reads an artifact from a specific JSON file.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        debug!(@grey, "reading artifact {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(name, &text)
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, ArtifactError> {
        let name = name.into();
        let artifact: ArtifactJson = serde_json::from_str(json)?;
        let bytecode = Bytes::from(artifact.bytecode);
        if bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode(name));
        }
        Ok(Self::new(name, artifact.abi, bytecode))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn initcode(&self, args: &[String]) -> Result<Bytes, DeploymentError> {
        let mut initcode = self.bytecode.to_vec();
        match &self.abi.constructor {
            None if args.is_empty() => {}
            None => {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "{} has no constructor but {} argument(s) were given",
                    self.name,
                    args.len()
                )))
            }
            Some(constructor) => {
                let values = coerce_args(&constructor.inputs, args)
                    .map_err(DeploymentError::InvalidConstructor)?;
                let encoded = constructor
                    .abi_encode_input(&values)
                    .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
                initcode.extend(encoded);
            }
        }
        Ok(initcode.into())
    }

    /// Selector and ABI-encoded arguments for calling `function`.
    pub fn calldata(&self, function: &str, args: &[String]) -> Result<Bytes, TransactionError> {
        let overloads = self.abi.function(function).ok_or_else(|| {
            TransactionError::InvalidCall(format!("{} has no function {function}", self.name))
        })?;
        let func = overloads
            .iter()
            .find(|func| func.inputs.len() == args.len())
            .ok_or_else(|| {
                TransactionError::InvalidCall(format!(
                    "no overload of {function} takes {} argument(s)",
                    args.len()
                ))
            })?;
        let values = coerce_args(&func.inputs, args).map_err(TransactionError::InvalidCall)?;
        let calldata = func
            .abi_encode_input(&values)
            .map_err(|err| TransactionError::InvalidCall(err.to_string()))?;
        Ok(calldata.into())
    }
}

fn coerce_args(params: &[Param], args: &[String]) -> Result<Vec<DynSolValue>, String> {
    if params.len() != args.len() {
        return Err(format!(
            "mismatch number of arguments (want {}; got {})",
            params.len(),
            args.len()
        ));
    }
    params
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param
                .resolve()
                .map_err(|err| format!("could not resolve arg {param}: {err}"))?;
            ty.coerce_str(arg)
                .map_err(|err| format!("could not parse arg {param}: {err}"))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid artifact search pattern: {0}")]
    Pattern(String),
    #[error("no artifact for {name} under {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("multiple artifacts for {name}: {paths:?}")]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("{0} has no bytecode (is it abstract or an interface?)")]
    NoBytecode(String),
}
