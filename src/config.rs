//! Session configuration: the master keys/salt for each direction and the
//! protection profile and replay-detector overrides a [`Context`] is built
//! with.
//!
//! [`Context`]: crate::context::Context

use crate::option::ContextOption;
use crate::protection_profile::ProtectionProfile;

/// Bundles the keys required to set up an SRTP session: one master key and
/// salt for traffic this side originates, one for traffic it receives.
#[derive(Clone, Default)]
pub struct SessionKeys {
    pub local_master_key: Vec<u8>,
    pub local_master_salt: Vec<u8>,
    pub remote_master_key: Vec<u8>,
    pub remote_master_salt: Vec<u8>,
}

/// Configures a [`crate::session::Session`]. Once passed to `Session::new`
/// it is consumed; it is not read again afterwards.
#[derive(Default)]
pub struct Config {
    pub keys: SessionKeys,
    pub profile: ProtectionProfile,
    pub local_rtp_options: Option<ContextOption>,
    pub remote_rtp_options: Option<ContextOption>,
    pub local_rtcp_options: Option<ContextOption>,
    pub remote_rtcp_options: Option<ContextOption>,
}
