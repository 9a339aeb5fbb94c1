use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, info};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

use crate::address::pubkey_to_bech32;
use crate::config::KeyringConfig;
use crate::error::Error;

pub const REDACTED: &str = "REDACTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Validator,
    BridgeExecutor,
    OutputSubmitter,
    BatchSubmitter,
    Challenger,
}

impl Role {
    /// Every role, in payload order.
    pub const ALL: [Role; 5] = [
        Role::Validator,
        Role::BridgeExecutor,
        Role::OutputSubmitter,
        Role::BatchSubmitter,
        Role::Challenger,
    ];

    /// The batch submitter posts to the DA layer; every other role lives on L1 and L2.
    pub fn needs_l1_l2(&self) -> bool {
        !matches!(self, Role::BatchSubmitter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Vm {
    Evm,
    Move,
    Wasm,
}

impl Vm {
    pub fn parse(vm: &str) -> Result<Self, Error> {
        Vm::from_str(vm).map_err(|_| Error::unsupported_vm(vm.to_string()))
    }

    pub fn default_coins(&self) -> &'static str {
        match self {
            Vm::Evm => "1GAS",
            Vm::Move | Vm::Wasm => "1umin",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DaLayer {
    #[default]
    Initia,
    Celestia,
}

impl DaLayer {
    pub fn parse(da: &str) -> Result<Self, Error> {
        DaLayer::from_str(da).map_err(|_| Error::unsupported_da_layer(da.to_string()))
    }

    pub fn hrp<'a>(&self, config: &'a KeyringConfig) -> &'a str {
        match self {
            DaLayer::Initia => &config.l1_prefix,
            DaLayer::Celestia => &config.celestia_prefix,
        }
    }
}

/// Key material for one role, produced by the external derivation layer.
#[derive(Clone)]
pub struct RoleKey {
    pub role: Role,
    mnemonic: String,
    pub public_key: Vec<u8>,
}

impl RoleKey {
    pub fn new(role: Role, mnemonic: String, public_key: Vec<u8>) -> Self {
        Self { role, mnemonic, public_key }
    }
}

impl Debug for RoleKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RoleKey")
            .field("role", &self.role)
            .field("mnemonic", &REDACTED)
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub vm: Vm,
    pub da: DaLayer,
    /// Genesis coins; `None` falls back to the VM's default denom.
    pub coins: Option<String>,
    pub include_mnemonics: bool,
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(vm: Vm) -> Self {
        Self {
            vm,
            da: DaLayer::default(),
            coins: None,
            include_mnemonics: false,
            output: None,
        }
    }

    /// Mnemonics are only emitted into a durable output file, never to stdout.
    pub fn validate(&self) -> Result<(), Error> {
        if self.include_mnemonics && self.output.is_none() {
            return Err(Error::mnemonics_require_output());
        }
        Ok(())
    }

    pub fn coins(&self) -> String {
        self.coins.clone().unwrap_or_else(|| self.vm.default_coins().to_string())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum MnemonicField {
    Redacted,
    Included(String),
}

impl Debug for MnemonicField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MnemonicField::Redacted => write!(f, "Redacted"),
            MnemonicField::Included(_) => write!(f, "Included(..)"),
        }
    }
}

impl Serialize for MnemonicField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MnemonicField::Redacted => serializer.serialize_str(REDACTED),
            MnemonicField::Included(mnemonic) => serializer.serialize_str(mnemonic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub mnemonic: MnemonicField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l1_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub da_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisAccount {
    pub address: String,
    pub coins: String,
}

/// Serialises as a JSON object keyed by role name, preserving role order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemKeys(pub Vec<(Role, KeyEntry)>);

impl SystemKeys {
    pub fn get(&self, role: Role) -> Option<&KeyEntry> {
        self.0.iter().find(|(r, _)| *r == role).map(|(_, entry)| entry)
    }
}

impl Serialize for SystemKeys {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (role, entry) in &self.0 {
            map.serialize_entry(&role.to_string(), entry)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemKeysPayload {
    pub system_keys: SystemKeys,
    pub genesis_accounts: Vec<GenesisAccount>,
}

impl SystemKeysPayload {
    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, Error> {
        let mut json = serde_json::to_string_pretty(self).map_err(Error::serde_json)?;
        json.push('\n');
        Ok(json)
    }
}

/// Builds the system-key payload for every [`Role`] from caller-supplied keys.
///
/// L1/L2 roles get identical `l1_address`/`l2_address` and a genesis account; the batch
/// submitter gets a `da_address` under the DA layer's prefix. Mnemonics stay redacted
/// unless `options` opts in with an output destination.
pub fn build_system_keys(
    keys: &[RoleKey],
    options: &GenerateOptions,
    config: &KeyringConfig,
) -> Result<SystemKeysPayload, Error> {
    options.validate()?;

    let coins = options.coins();
    let da_hrp = options.da.hrp(config);
    let mut payload = SystemKeysPayload::default();

    for role in Role::ALL {
        let key = keys
            .iter()
            .find(|k| k.role == role)
            .ok_or_else(|| Error::missing_role_key(role.to_string()))?;

        let mnemonic = if options.include_mnemonics {
            MnemonicField::Included(key.mnemonic.clone())
        } else {
            MnemonicField::Redacted
        };
        let mut entry = KeyEntry {
            mnemonic,
            l1_address: None,
            l2_address: None,
            da_address: None,
        };

        if role.needs_l1_l2() {
            let address = pubkey_to_bech32(&key.public_key, &config.l1_prefix)?;
            entry.l1_address = Some(address.clone());
            entry.l2_address = Some(address.clone());
            payload.genesis_accounts.push(GenesisAccount {
                address,
                coins: coins.clone(),
            });
        } else {
            entry.da_address = Some(pubkey_to_bech32(&key.public_key, da_hrp)?);
        }

        debug!("built {} key entry", role);
        payload.system_keys.0.push((role, entry));
    }

    info!(
        "built {} system keys for vm {} (mnemonics {})",
        payload.system_keys.0.len(),
        options.vm,
        if options.include_mnemonics { "included" } else { "redacted" }
    );

    Ok(payload)
}
