multiversx_sc::imports!();

use crate::{storage, types::ProposalId};

const DOMAIN_NAME: &[u8] = b"CollectorDao";
const VOTE_TYPE: &[u8] = b"Vote";
const ED25519_SIGNATURE_LENGTH: usize = 64;

/// Off-chain vote authorization.
///
/// A member signs the digest of (proposal, support, signer) under this DAO's
/// domain with the ed25519 key behind their address. Anyone may submit the
/// signature; each digest is accepted once.
#[multiversx_sc::module]
pub trait VoteSignatureModule: storage::GovernorStorageModule {
    #[view(getMessageHash)]
    fn get_message_hash(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        support: bool,
        signer: &ManagedAddress,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut vote = ManagedBuffer::new_from_bytes(VOTE_TYPE);
        vote.append(proposal_id.as_managed_buffer());
        vote.append_bytes(&[support as u8]);
        vote.append(signer.as_managed_buffer());
        let vote_hash = self.crypto().keccak256(&vote);

        let mut digest = self.domain_separator().as_managed_buffer().clone();
        digest.append(vote_hash.as_managed_buffer());
        self.crypto().keccak256(&digest)
    }

    fn domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut domain = ManagedBuffer::new_from_bytes(DOMAIN_NAME);
        domain.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().keccak256(&domain)
    }

    /// Fails the transaction unless `signature` is a fresh ed25519 signature
    /// by `signer` over the vote digest.
    fn verify_vote_signature(
        &self,
        signer: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        support: bool,
        signature: &ManagedBuffer,
    ) {
        require!(
            signature.len() == ED25519_SIGNATURE_LENGTH,
            "invalid signature"
        );

        let digest = self.get_message_hash(proposal_id, support, signer);
        let mut used_digests = self.used_vote_digests();
        require!(
            used_digests.insert(digest.clone()),
            "signature already used"
        );

        self.crypto().verify_ed25519(
            signer.as_managed_buffer(),
            digest.as_managed_buffer(),
            signature,
        );
    }
}
