//! Solidity declarations for the Superform protocol contracts.
//!
//! Everything lives in a single `sol!` invocation so the shared tuple types
//! (`LiqRequest`, the `*StateReq` requests, the router-plus argument structs)
//! are one Rust type each and can be passed to any interface that takes them.
//! Function, event and error lists mirror the compiler ABI under `abi/`.

use alloy::sol;

sol! {
    #![sol(all_derives)]

    struct LiqRequest {
        bytes txData;
        address token;
        address interimToken;
        uint8 bridgeId;
        uint64 liqDstChainId;
        uint256 nativeAmount;
    }

    struct InitSingleVaultData {
        uint256 payloadId;
        uint256 superformId;
        uint256 amount;
        uint256 outputAmount;
        uint256 maxSlippage;
        LiqRequest liqData;
        bool hasDstSwap;
        bool retain4626;
        address receiverAddress;
        bytes extraFormData;
    }

    struct SingleVaultSFData {
        uint256 superformId;
        uint256 amount;
        uint256 outputAmount;
        uint256 maxSlippage;
        LiqRequest liqRequest;
        bytes permit2data;
        bool hasDstSwap;
        bool retain4626;
        address receiverAddress;
        address receiverAddressSP;
        bytes extraFormData;
    }

    struct MultiVaultSFData {
        uint256[] superformIds;
        uint256[] amounts;
        uint256[] outputAmounts;
        uint256[] maxSlippages;
        LiqRequest[] liqRequests;
        bytes permit2data;
        bool[] hasDstSwaps;
        bool[] retain4626s;
        address receiverAddress;
        address receiverAddressSP;
        bytes extraFormData;
    }

    struct SingleDirectSingleVaultStateReq {
        SingleVaultSFData superformData;
    }

    struct SingleDirectMultiVaultStateReq {
        MultiVaultSFData superformData;
    }

    struct SingleXChainSingleVaultStateReq {
        uint8[] ambIds;
        uint64 dstChainId;
        SingleVaultSFData superformData;
    }

    struct SingleXChainMultiVaultStateReq {
        uint8[] ambIds;
        uint64 dstChainId;
        MultiVaultSFData superformsData;
    }

    struct MultiDstSingleVaultStateReq {
        uint8[][] ambIds;
        uint64[] dstChainIds;
        SingleVaultSFData[] superformsData;
    }

    struct MultiDstMultiVaultStateReq {
        uint8[][] ambIds;
        uint64[] dstChainIds;
        MultiVaultSFData[] superformsData;
    }

    struct AMBMessage {
        uint256 txInfo;
        bytes params;
    }

    struct PaymentHelperConfig {
        address nativeFeedOracle;
        address gasPriceOracle;
        uint256 swapGasUsed;
        uint256 updateDepositGasUsed;
        uint256 depositGasUsed;
        uint256 withdrawGasUsed;
        uint256 defaultNativePrice;
        uint256 defaultGasPrice;
        uint256 dstGasPerByte;
        uint256 ackGasCost;
        uint256 timelockCost;
        uint256 emergencyCost;
        uint256 updateWithdrawGasUsed;
    }

    struct Deposit4626Args {
        uint256 amount;
        uint256 expectedOutputAmount;
        uint256 maxSlippage;
        address receiverAddressSP;
        bytes depositCallData;
    }

    struct RebalanceSinglePositionSyncArgs {
        uint256 id;
        uint256 sharesToRedeem;
        uint256 previewRedeemAmount;
        uint256 rebalanceFromMsgValue;
        uint256 rebalanceToMsgValue;
        address interimAsset;
        uint256 slippage;
        address receiverAddressSP;
        bytes callData;
        bytes rebalanceToCallData;
    }

    struct RebalanceMultiPositionsSyncArgs {
        uint256[] ids;
        uint256[] sharesToRedeem;
        uint256 previewRedeemAmount;
        uint256 rebalanceFromMsgValue;
        uint256 rebalanceToMsgValue;
        address interimAsset;
        uint256 slippage;
        address receiverAddressSP;
        bytes callData;
        bytes rebalanceToCallData;
    }

    struct InitiateXChainRebalanceArgs {
        uint256 id;
        uint256 sharesToRedeem;
        address receiverAddressSP;
        address interimAsset;
        uint256 finalizeSlippage;
        uint256 expectedAmountInterimAsset;
        bytes4 rebalanceToSelector;
        bytes callData;
        bytes rebalanceToAmbIds;
        bytes rebalanceToDstChainIds;
        bytes rebalanceToSfData;
    }

    struct InitiateXChainRebalanceMultiArgs {
        uint256[] ids;
        uint256[] sharesToRedeem;
        address receiverAddressSP;
        address interimAsset;
        uint256 finalizeSlippage;
        uint256 expectedAmountInterimAsset;
        bytes4 rebalanceToSelector;
        bytes callData;
        bytes rebalanceToAmbIds;
        bytes rebalanceToDstChainIds;
        bytes rebalanceToSfData;
    }

    struct XChainRebalanceData {
        bytes4 rebalanceSelector;
        address interimAsset;
        uint256 slippage;
        uint256 expectedAmountInterimAsset;
        bytes rebalanceToAmbIds;
        bytes rebalanceToDstChainIds;
        bytes rebalanceToSfData;
    }

    struct CompleteCrossChainRebalanceArgs {
        address receiverAddressSP;
        uint256 routerPlusPayloadId;
        uint256 amountReceivedInterimAsset;
        uint256[][] newAmounts;
        uint256[][] newOutputAmounts;
        LiqRequest[][] liqRequests;
    }

    struct DecodedRouterPlusRebalanceCallData {
        address interimAsset;
        bytes4 rebalanceSelector;
        uint256 userSlippage;
        address[] receiverAddress;
        uint256[][] superformIds;
        uint256[][] amounts;
        uint256[][] outputAmounts;
        uint8[][] ambIds;
        uint64[] dstChainIds;
    }

    /// Cross-chain payload registry: receives AMB messages, tracks payload state and
    /// processes deposits and withdrawals once quorum is reached.
    #[sol(rpc)]
    interface ICoreStateRegistry {
        function CHAIN_ID() external view returns (uint64);
        function dispatchPayload(address srcSender_, uint8[] ambIds_, uint64 dstChainId_, bytes message_, bytes extraData_) external payable;
        function disputeRescueFailedDeposits(uint256 payloadId_) external;
        function finalizeRescueFailedDeposits(uint256 payloadId_) external;
        function getFailedDeposits(uint256 payloadId_) external view returns (uint256[] superformIds, uint256[] amounts, uint256 lastProposedTime);
        function getMessageAMB(uint256 payloadId_) external view returns (uint8[]);
        function messageQuorum(bytes32) external view returns (uint256);
        function payloadBody(uint256) external view returns (bytes);
        function payloadHeader(uint256) external view returns (uint256);
        function payloadTracking(uint256) external view returns (uint8);
        function payloadsCount() external view returns (uint256);
        function processPayload(uint256 payloadId_) external payable;
        function proposeRescueFailedDeposits(uint256 payloadId_, uint256[] proposedAmounts_) external;
        function receivePayload(uint64 srcChainId_, bytes message_) external;
        function superRegistry() external view returns (address);
        function updateDepositPayload(uint256 payloadId_, address[] finalTokens_, uint256[] finalAmounts_) external;
        function updateWithdrawPayload(uint256 payloadId_, bytes[] txData_) external;
        function validateSlippage(uint256 finalAmount_, uint256 amount_, uint256 maxSlippage_) external view returns (bool);

        event FailedXChainDeposits(uint256 indexed payloadId);
        event PayloadProcessed(uint256 indexed payloadId);
        event PayloadReceived(uint64 indexed srcChainId, uint64 indexed dstChainId, uint256 indexed payloadId);
        event PayloadUpdated(uint256 indexed payloadId);
        event ProofReceived(bytes32 indexed proof);
        event RescueDisputed(uint256 indexed payloadId);
        event RescueFinalized(uint256 indexed payloadId);
        event RescueProposed(uint256 indexed payloadId, uint256[] superformIds, uint256[] proposedAmount, uint256 proposedTime);
        event SuperRegistryUpdated(address indexed superRegistry);

        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error BRIDGE_TOKENS_PENDING();
        error CANNOT_UPDATE_WITHDRAW_TX_DATA();
        error DELAY_NOT_SET();
        error DIFFERENT_PAYLOAD_UPDATE_AMOUNTS_LENGTH();
        error DIFFERENT_PAYLOAD_UPDATE_TX_DATA_LENGTH();
        error DISPUTE_TIME_ELAPSED();
        error FailedInnerCall();
        error INSUFFICIENT_QUORUM();
        error INVALID_CHAIN_ID();
        error INVALID_DST_SWAP_AMOUNT();
        error INVALID_INTERNAL_CALL();
        error INVALID_PAYLOAD_ID();
        error INVALID_PAYLOAD_TYPE();
        error INVALID_PAYLOAD_UPDATE_REQUEST();
        error INVALID_PROOF_BRIDGE_ID();
        error INVALID_PROOF_BRIDGE_IDS();
        error INVALID_RESCUE_DATA();
        error INVALID_UPDATE_FINAL_TOKEN();
        error NEGATIVE_SLIPPAGE();
        error NOT_AMB_IMPLEMENTATION();
        error NOT_PRIVILEGED_CALLER(bytes32 role);
        error NOT_SUPERFORM_ROUTER();
        error NOT_VALID_DISPUTER();
        error PAYLOAD_ALREADY_PROCESSED();
        error PAYLOAD_ALREADY_UPDATED();
        error PAYLOAD_NOT_UPDATED();
        error RESCUE_ALREADY_PROPOSED();
        error RESCUE_LOCKED();
        error SLIPPAGE_OUT_OF_BOUNDS();
        error SUPERFORM_ID_NONEXISTENT();
        error SafeERC20FailedDecreaseAllowance(address spender, uint256 currentAllowance, uint256 requestedDecrease);
        error SafeERC20FailedOperation(address token);
        error ZERO_AMB_ID_LENGTH();
        error ZERO_AMOUNT();
        error ZERO_FINAL_TOKEN();
    }

    /// Form wrapping an ERC-4626 vault; entry point for direct and cross-chain vault actions.
    #[sol(rpc)]
    interface IERC4626Form {
        function CHAIN_ID() external view returns (uint64);
        function asset() external view returns (address);
        function directDepositIntoVault(InitSingleVaultData singleVaultData_, address srcSender_) external payable returns (uint256 shares);
        function directWithdrawFromVault(InitSingleVaultData singleVaultData_, address srcSender_) external returns (uint256 assets);
        function emergencyWithdraw(address receiverAddress_, uint256 amount_) external;
        function forwardDustToPaymaster(address token_) external;
        function getPreviewPricePerVaultShare() external view returns (uint256);
        function getPricePerVaultShare() external view returns (uint256);
        function getStateRegistryId() external view returns (uint8);
        function getTotalAssets() external view returns (uint256);
        function getTotalSupply() external view returns (uint256);
        function getVaultAddress() external view returns (address);
        function getVaultAsset() external view returns (address);
        function getVaultDecimals() external view returns (uint256);
        function getVaultName() external view returns (string);
        function getVaultShareBalance() external view returns (uint256);
        function getVaultSymbol() external view returns (string);
        function initialize(address superRegistry_, address vault_, address asset_) external;
        function previewDepositTo(uint256 assets_) external view returns (uint256);
        function previewRedeemFrom(uint256 shares_) external view returns (uint256);
        function previewWithdrawFrom(uint256 assets_) external view returns (uint256);
        function superRegistry() external view returns (address);
        function superformYieldTokenName() external view returns (string);
        function superformYieldTokenSymbol() external view returns (string);
        function supportsInterface(bytes4 interfaceId_) external view returns (bool);
        function vault() external view returns (address);
        function xChainDepositIntoVault(InitSingleVaultData singleVaultData_, address srcSender_, uint64 srcChainId_) external returns (uint256 shares);
        function xChainWithdrawFromVault(InitSingleVaultData singleVaultData_, address srcSender_, uint64 srcChainId_) external returns (uint256 assets);

        event EmergencyWithdrawalProcessed(address indexed refundAddress, uint256 indexed amount);
        event FormDustForwardedToPaymaster(address indexed token, uint256 indexed amount);
        event Initialized(uint64 version);
        event Processed(uint64 indexed srcChainID, uint64 indexed dstChainId, uint256 indexed srcPayloadId, uint256 amount, address vault);
        event VaultAdded(uint256 indexed id, address indexed vault);

        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error CANNOT_FORWARD_4646_TOKEN();
        error DIFFERENT_TOKENS();
        error DIRECT_DEPOSIT_SWAP_FAILED();
        error DIRECT_WITHDRAW_INVALID_LIQ_REQUEST();
        error FAILED_TO_EXECUTE_TXDATA(address token);
        error FailedInnerCall();
        error INSUFFICIENT_ALLOWANCE_FOR_DEPOSIT();
        error INSUFFICIENT_BALANCE();
        error INSUFFICIENT_NATIVE_AMOUNT();
        error INVALID_CHAIN_ID();
        error InvalidInitialization();
        error NOT_CORE_STATE_REGISTRY();
        error NOT_EMERGENCY_QUEUE();
        error NOT_SUPERFORM_ROUTER();
        error NOT_SUPER_REGISTRY();
        error NotInitializing();
        error PAUSED();
        error SUPERFORM_ID_NONEXISTENT();
        error SafeERC20FailedOperation(address token);
        error VAULT_IMPLEMENTATION_FAILED();
        error WITHDRAW_TOKEN_NOT_UPDATED();
        error WITHDRAW_TX_DATA_NOT_UPDATED();
        error WITHDRAW_ZERO_COLLATERAL();
        error XCHAIN_WITHDRAW_INVALID_LIQ_REQUEST();
        error ZERO_ADDRESS();
        error ZERO_AMOUNT();
    }

    /// Collects protocol fees and pays relayers for AMB delivery.
    #[sol(rpc)]
    interface IPayMaster {
        function makePayment(address user_) external payable;
        function rebalanceTo(bytes32 superRegistryId_, LiqRequest req_, uint64 dstChainId_) external;
        function superRegistry() external view returns (address);
        function totalFeesPaid(address) external view returns (uint256);
        function treatAMB(uint8 ambId_, uint256 nativeValue_, bytes data_) external;
        function withdrawNativeTo(bytes32 superRegistryId_, uint256 nativeAmount_) external;
        function withdrawTo(bytes32 superRegistryId_, address token_, uint256 amount_) external;

        event NativeWithdrawn(address indexed receiver, uint256 indexed amount);
        event Payment(address indexed user, uint256 indexed amount);
        event TokenWithdrawn(address indexed receiver, address indexed token, uint256 indexed amount);

        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error FAILED_TO_EXECUTE_TXDATA(address token);
        error FAILED_TO_SEND_NATIVE();
        error FailedInnerCall();
        error INSUFFICIENT_BALANCE();
        error INSUFFICIENT_NATIVE_AMOUNT();
        error INVALID_TXDATA_RECEIVER();
        error NOT_PAYMENT_ADMIN();
        error SafeERC20FailedOperation(address token);
        error ZERO_ADDRESS();
        error ZERO_AMOUNT();
        error ZERO_INPUT_VALUE();
    }

    /// Gas and fee estimator for every router request shape.
    #[sol(rpc)]
    interface IPaymentHelper {
        function CHAIN_ID() external view returns (uint64);
        function ackGasCost(uint64 chainId) external view returns (uint256 gasForAck);
        function addRemoteChain(uint64 chainId_, PaymentHelperConfig config_) external;
        function addRemoteChains(uint64[] chainIds_, PaymentHelperConfig[] configs_) external;
        function batchUpdateRemoteChain(uint64 chainId_, uint256[] configTypes_, bytes[] configs_) external;
        function batchUpdateRemoteChains(uint64[] chainIds_, uint256[][] configTypes_, bytes[][] configs_) external;
        function calculateAMBData(uint64 dstChainId_, uint8[] ambIds_, bytes message_) external view returns (uint256 totalFees, bytes extraData);
        function depositGasUsed(uint64 chainId) external view returns (uint256 gasForDeposit);
        function emergencyCost(uint64 chainId) external view returns (uint256 gasForEmergency);
        function estimateAMBFees(uint8[] ambIds_, uint64 dstChainId_, bytes message_, bytes[] extraData_) external view returns (uint256 totalFees, uint256[]);
        function estimateAckCost(uint256 payloadId_) external view returns (uint256 totalFees);
        function estimateAckCostDefault(bool multi, uint8[] ackAmbIds, uint64 srcChainId) external view returns (uint256 totalFees);
        function estimateAckCostDefaultNativeSource(bool multi, uint8[] ackAmbIds, uint64 srcChainId) external view returns (uint256);
        function estimateMultiDstMultiVault(MultiDstMultiVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 srcAmount, uint256 dstAmount, uint256 totalAmount);
        function estimateMultiDstSingleVault(MultiDstSingleVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 srcAmount, uint256 dstAmount, uint256 totalAmount);
        function estimateSingleDirectMultiVault(SingleDirectMultiVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 dstOrSameChainAmt, uint256 totalAmount);
        function estimateSingleDirectSingleVault(SingleDirectSingleVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 dstOrSameChainAmt, uint256 totalAmount);
        function estimateSingleXChainMultiVault(SingleXChainMultiVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 srcAmount, uint256 dstAmount, uint256 totalAmount);
        function estimateSingleXChainSingleVault(SingleXChainSingleVaultStateReq req_, bool isDeposit_) external view returns (uint256 liqAmount, uint256 srcAmount, uint256 dstAmount, uint256 totalAmount);
        function extraDataForTransmuter() external view returns (bytes);
        function gasPerByte(uint64 chainId) external view returns (uint256 gasPerByte);
        function gasPrice(uint64 chainId) external view returns (uint256 defaultGasPrice);
        function gasPriceOracle(uint64 chainId) external view returns (address);
        function getRegisterTransmuterAMBData() external view returns (bytes);
        function nativeFeedOracle(uint64 chainId) external view returns (address);
        function nativePrice(uint64 chainId) external view returns (uint256 defaultNativePrice);
        function superRegistry() external view returns (address);
        function swapGasUsed(uint64 chainId) external view returns (uint256 gasForSwap);
        function timelockCost(uint64 chainId) external view returns (uint256 gasForTimelock);
        function updateDepositGasUsed(uint64 chainId) external view returns (uint256 gasForUpdateDeposit);
        function updateRegisterAERC20Params(bytes extraDataForTransmuter_) external;
        function updateRemoteChain(uint64 chainId_, uint256 configType_, bytes config_) external;
        function updateWithdrawGasUsed(uint64 chainId) external view returns (uint256 gasForUpdateWithdraw);
        function withdrawGasUsed(uint64 chainId) external view returns (uint256 gasForWithdraw);

        event ChainConfigAdded(uint64 chainId_, PaymentHelperConfig config_);
        event ChainConfigUpdated(uint64 indexed chainId_, uint256 indexed configType_, bytes config_);

        error ARRAY_LENGTH_MISMATCH();
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error CHAINLINK_INCOMPLETE_ROUND();
        error CHAINLINK_MALFUNCTION();
        error CHAINLINK_UNSUPPORTED_DECIMAL();
        error INVALID_CHAIN_ID();
        error INVALID_NATIVE_TOKEN_PRICE();
        error INVALID_PAYLOAD_ID();
        error NOT_PAYMENT_ADMIN();
        error NOT_PROTOCOL_ADMIN();
        error ZERO_ADDRESS();
        error ZERO_INPUT_VALUE();
    }

    /// ERC-1155A share ledger minted against superform deposits.
    #[sol(rpc)]
    interface ISuperPositions {
        function CHAIN_ID() external view returns (uint64);
        function aERC20Exists(uint256 id) external view returns (bool);
        function aErc20TokenId(uint256 id) external view returns (address aErc20Token);
        function allowance(address owner, address operator, uint256 id) external view returns (uint256);
        function balanceOf(address, uint256) external view returns (uint256);
        function balanceOfBatch(address[] owners, uint256[] ids) external view returns (uint256[] balances);
        function burnBatch(address srcSender_, uint256[] ids_, uint256[] amounts_) external;
        function burnSingle(address srcSender_, uint256 id_, uint256 amount_) external;
        function decreaseAllowance(address operator, uint256 id, uint256 subtractedValue) external returns (bool);
        function decreaseAllowanceForMany(address operator, uint256[] ids, uint256[] subtractedValues) external returns (bool);
        function dynamicURI() external view returns (string);
        function dynamicURIFrozen() external view returns (bool);
        function exists(uint256 id) external view returns (bool);
        function getERC20TokenAddress(uint256 id) external view returns (address);
        function increaseAllowance(address operator, uint256 id, uint256 addedValue) external returns (bool);
        function increaseAllowanceForMany(address operator, uint256[] ids, uint256[] addedValues) external returns (bool);
        function isApprovedForAll(address, address) external view returns (bool);
        function mintBatch(address receiverAddressSP_, uint256[] ids_, uint256[] amounts_) external;
        function mintSingle(address receiverAddressSP_, uint256 id_, uint256 amount_) external;
        function name() external view returns (string);
        function registerAERC20(uint256 id) external payable returns (address);
        function safeBatchTransferFrom(address from, address to, uint256[] ids, uint256[] amounts, bytes data) external;
        function safeTransferFrom(address from, address to, uint256 id, uint256 amount, bytes data) external;
        function setApprovalForAll(address operator, bool approved) external;
        function setApprovalForMany(address operator, uint256[] ids, uint256[] amounts) external;
        function setApprovalForOne(address operator, uint256 id, uint256 amount) external;
        function setDynamicURI(string dynamicURI_, bool freeze_) external;
        function stateMultiSync(AMBMessage data_) external returns (uint64 srcChainId_);
        function stateSync(AMBMessage data_) external returns (uint64 srcChainId_);
        function stateSyncBroadcast(bytes data_) external payable;
        function superRegistry() external view returns (address);
        function supportsInterface(bytes4 interfaceId_) external view returns (bool);
        function symbol() external view returns (string);
        function totalSupply(uint256 id) external view returns (uint256);
        function transmuteBatchToERC1155A(address owner, uint256[] ids, uint256[] amounts, address receiver) external;
        function transmuteBatchToERC20(address owner, uint256[] ids, uint256[] amounts, address receiver) external;
        function transmuteToERC1155A(address owner, uint256 id, uint256 amount, address receiver) external;
        function transmuteToERC20(address owner, uint256 id, uint256 amount, address receiver) external;
        function txHistory(uint256 transactionId) external view returns (uint256 txInfo, address receiverAddressSP);
        function updateTxHistory(uint256 payloadId_, uint256 txInfo_, address receiverAddressSP_) external;
        function uri(uint256 id) external view returns (string);
        function xChainPayloadCounter() external view returns (uint256);

        event AERC20TokenRegistered(uint256 indexed tokenId, address indexed tokenAddress);
        event ApprovalForAll(address indexed account, address indexed operator, bool approved);
        event ApprovalForOne(address indexed owner, address indexed spender, uint256 id, uint256 amount);
        event Completed(uint256 indexed txId);
        event DynamicURIUpdated(string indexed oldURI, string indexed newURI, bool indexed frozen);
        event TransferBatch(address indexed operator, address indexed from, address indexed to, uint256[] ids, uint256[] values);
        event TransferSingle(address indexed operator, address indexed from, address indexed to, uint256 id, uint256 value);
        event TransmutedBatchToERC1155A(address indexed user, uint256[] ids, uint256[] amounts, address indexed receiver);
        event TransmutedBatchToERC20(address indexed user, uint256[] ids, uint256[] amounts, address indexed receiver);
        event TransmutedToERC1155A(address indexed user, uint256 id, uint256 amount, address indexed receiver);
        event TransmutedToERC20(address indexed user, uint256 id, uint256 amount, address indexed receiver);
        event TxHistorySet(uint256 indexed payloadId, uint256 txInfo, address indexed receiverAddress);
        event URI(string value, uint256 indexed id);

        error AERC20_ALREADY_REGISTERED();
        error AERC20_NOT_REGISTERED();
        error ARRAY_LENGTH_MISMATCH();
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error DECREASED_ALLOWANCE_BELOW_ZERO();
        error DYNAMIC_URI_FROZEN();
        error ERC1155InsufficientBalance(address sender, uint256 balance, uint256 needed, uint256 tokenId);
        error ERC1155InvalidApprover(address approver);
        error ERC1155InvalidArrayLength(uint256 idsLength, uint256 valuesLength);
        error ERC1155InvalidOperator(address operator);
        error ERC1155InvalidReceiver(address receiver);
        error ERC1155InvalidSender(address sender);
        error ERC1155MissingApprovalForAll(address operator, address owner);
        error FAILED_TO_SEND_NATIVE();
        error ID_NOT_MINTED_YET();
        error INVALID_BROADCAST_FEE();
        error INVALID_CHAIN_ID();
        error INVALID_MESSAGE_TYPE();
        error INVALID_PAYLOAD_TYPE();
        error LENGTH_MISMATCH();
        error NOT_BROADCAST_REGISTRY();
        error NOT_MINTER();
        error NOT_MINTER_STATE_REGISTRY_ROLE();
        error NOT_PROTOCOL_ADMIN();
        error NOT_SUPERFORM_ROUTER();
        error SRC_TX_TYPE_MISMATCH();
        error SUPERFORM_ID_NONEXISTENT();
        error TRANSFER_TO_ADDRESS_ZERO();
        error TX_HISTORY_NOT_FOUND();
        error ZERO_ADDRESS();
    }

    /// Registry of form implementations and the superforms created from them.
    #[sol(rpc)]
    interface ISuperformFactory {
        function CHAIN_ID() external view returns (uint64);
        function addFormImplementation(address formImplementation_, uint32 formImplementationId_, uint8 formStateRegistryId_) external;
        function changeFormImplementationPauseStatus(uint32 formImplementationId_, uint8 status_, bytes extraData_) external payable;
        function createSuperform(uint32 formImplementationId_, address vault_) external returns (uint256 superformId_, address superform_);
        function formImplementation(uint32 formImplementationId) external view returns (address formImplementationAddress);
        function formImplementationIds(address formImplementationAddress) external view returns (uint32 formImplementationId);
        function formImplementationPaused(uint32 formImplementationId) external view returns (uint8);
        function formImplementations(uint256) external view returns (address);
        function formStateRegistryId(uint32 formImplementationId) external view returns (uint8 formRegistryId);
        function getAllSuperformsFromVault(address vault_) external view returns (uint256[] superformIds_, address[] superforms_);
        function getFormCount() external view returns (uint256 forms_);
        function getFormImplementation(uint32 formImplementationId_) external view returns (address);
        function getFormStateRegistryId(uint32 formImplementationId_) external view returns (uint8 formStateRegistryId_);
        function getSuperform(uint256 superformId_) external pure returns (address superform_, uint32 formImplementationId_, uint64 chainId_);
        function getSuperformCount() external view returns (uint256 superforms_);
        function isFormImplementationPaused(uint32 formImplementationId_) external view returns (bool);
        function isSuperform(uint256 superformId) external view returns (bool superformIdExists);
        function stateSyncBroadcast(bytes data_) external payable;
        function superRegistry() external view returns (address);
        function superforms(uint256) external view returns (uint256);
        function vaultFormImplCombinationToSuperforms(bytes32 vaultFormImplementationCombination) external view returns (uint256 superformIds);
        function vaultToFormImplementationId(address vault, uint256) external view returns (uint256 formImplementationId);
        function vaultToSuperforms(address vault, uint256) external view returns (uint256 superformIds);
        function xChainPayloadCounter() external view returns (uint256);

        event FormImplementationAdded(address indexed formImplementation, uint256 indexed formImplementationId, uint8 indexed formStateRegistryId);
        event FormImplementationPaused(uint256 indexed formImplementationId, uint8 indexed paused);
        event SuperRegistrySet(address indexed superRegistry);
        event SuperformCreated(uint256 indexed formImplementationId, address indexed vault, uint256 indexed superformId, address superform);

        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error ERC1167FailedCreateClone();
        error ERC165_UNSUPPORTED();
        error FAILED_TO_SEND_NATIVE();
        error FORM_DOES_NOT_EXIST();
        error FORM_IMPLEMENTATION_ALREADY_EXISTS();
        error FORM_IMPLEMENTATION_ID_ALREADY_EXISTS();
        error FORM_INTERFACE_UNSUPPORTED();
        error INVALID_BROADCAST_FEE();
        error INVALID_CHAIN_ID();
        error INVALID_FORM_ID();
        error INVALID_FORM_REGISTRY_ID();
        error MSG_VALUE_NOT_ZERO();
        error NOT_BROADCAST_REGISTRY();
        error NOT_EMERGENCY_ADMIN();
        error NOT_PROTOCOL_ADMIN();
        error VAULT_FORM_IMPLEMENTATION_COMBINATION_EXISTS();
        error ZERO_ADDRESS();
    }

    /// User entry point for single/multi vault, direct/cross-chain deposits and withdrawals.
    #[sol(rpc)]
    interface ISuperformRouter {
        function CHAIN_ID() external view returns (uint64);
        function forwardDustToPaymaster(address token_) external;
        function multiDstMultiVaultDeposit(MultiDstMultiVaultStateReq req_) external payable;
        function multiDstMultiVaultWithdraw(MultiDstMultiVaultStateReq req_) external payable;
        function multiDstSingleVaultDeposit(MultiDstSingleVaultStateReq req_) external payable;
        function multiDstSingleVaultWithdraw(MultiDstSingleVaultStateReq req_) external payable;
        function payloadIds() external view returns (uint256);
        function singleDirectMultiVaultDeposit(SingleDirectMultiVaultStateReq req_) external payable;
        function singleDirectMultiVaultWithdraw(SingleDirectMultiVaultStateReq req_) external payable;
        function singleDirectSingleVaultDeposit(SingleDirectSingleVaultStateReq req_) external payable;
        function singleDirectSingleVaultWithdraw(SingleDirectSingleVaultStateReq req_) external payable;
        function singleXChainMultiVaultDeposit(SingleXChainMultiVaultStateReq req_) external payable;
        function singleXChainMultiVaultWithdraw(SingleXChainMultiVaultStateReq req_) external payable;
        function singleXChainSingleVaultDeposit(SingleXChainSingleVaultStateReq req_) external payable;
        function singleXChainSingleVaultWithdraw(SingleXChainSingleVaultStateReq req_) external payable;
        function superRegistry() external view returns (address);

        event Completed();
        event CrossChainInitiatedDepositMulti(uint256 indexed payloadId, uint64 indexed dstChainId, uint256[] superformIds, uint256[] amountsIn, uint8[] bridgeIds, uint8[] ambIds);
        event CrossChainInitiatedDepositSingle(uint256 indexed payloadId, uint64 indexed dstChainId, uint256 superformIds, uint256 amountIn, uint8 bridgeId, uint8[] ambIds);
        event CrossChainInitiatedWithdrawMulti(uint256 indexed payloadId, uint64 indexed dstChainId, uint256[] superformIds, uint8[] ambIds);
        event CrossChainInitiatedWithdrawSingle(uint256 indexed payloadId, uint64 indexed dstChainId, uint256 superformIds, uint8[] ambIds);
        event RouterDustForwardedToPaymaster(address indexed token, uint256 indexed amount);

        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error ERC1155InvalidReceiver(address receiver);
        error FAILED_TO_EXECUTE_TXDATA(address token);
        error FailedInnerCall();
        error INSUFFICIENT_ALLOWANCE_FOR_DEPOSIT();
        error INSUFFICIENT_BALANCE();
        error INSUFFICIENT_NATIVE_AMOUNT();
        error INVALID_ACTION();
        error INVALID_CHAIN_ID();
        error INVALID_DEPOSIT_TOKEN();
        error INVALID_SUPERFORMS_DATA();
        error NO_TXDATA_PRESENT();
        error SafeERC20FailedOperation(address token);
        error ZERO_ADDRESS();
        error ZERO_AMOUNT();
    }

    /// Rebalancing and ERC-4626 wrapping helper on top of the router.
    #[sol(rpc)]
    interface ISuperformRouterPlus {
        function CHAIN_ID() external view returns (uint64);
        function ROUTER_PLUS_PAYLOAD_ID() external view returns (uint256);
        function deposit4626(address vault_, Deposit4626Args args) external payable;
        function forwardDustToPaymaster(address token_) external;
        function onERC1155BatchReceived(address, address, uint256[], uint256[], bytes) external pure returns (bytes4);
        function onERC1155Received(address, address, uint256, uint256, bytes) external pure returns (bytes4);
        function rebalanceMultiPositions(RebalanceMultiPositionsSyncArgs args) external payable;
        function rebalanceSinglePosition(RebalanceSinglePositionSyncArgs args) external payable;
        function startCrossChainRebalance(InitiateXChainRebalanceArgs args) external payable;
        function startCrossChainRebalanceMulti(InitiateXChainRebalanceMultiArgs args) external payable;
        function superRegistry() external view returns (address);
        function supportsInterface(bytes4 interfaceId) external pure returns (bool);
        function whitelistedSelectors(uint8, bytes4 selector) external view returns (bool whitelisted);

        event Deposit4626Completed(address indexed receiver, address indexed vault);
        event RebalanceMultiSyncCompleted(address indexed receiver, uint256[] ids, uint256[] amounts);
        event RebalanceSyncCompleted(address indexed receiver, uint256 indexed id, uint256 amount);
        event RouterPlusDustForwardedToPaymaster(address indexed token, uint256 amount);
        event XChainRebalanceInitiated(address indexed receiver, uint256 indexed routerPlusPayloadId, uint256 id, uint256 amount, address interimAsset, uint256 finalizeSlippage, uint256 expectedAmountInterimAsset, bytes4 rebalanceToSelector);
        event XChainRebalanceMultiInitiated(address indexed receiver, uint256 indexed routerPlusPayloadId, uint256[] ids, uint256[] amounts, address interimAsset, uint256 finalizeSlippage, uint256 expectedAmountInterimAsset, bytes4 rebalanceToSelector);

        error ARRAY_LENGTH_MISMATCH();
        error ASSETS_RECEIVED_OUT_OF_SLIPPAGE();
        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error FAILED_TO_SEND_NATIVE();
        error FailedInnerCall();
        error INVALID_DEPOSIT_SELECTOR();
        error INVALID_FEE();
        error INVALID_REBALANCE_FROM_SELECTOR();
        error INVALID_REBALANCE_SELECTOR();
        error REBALANCE_MULTI_POSITIONS_DIFFERENT_AMOUNTS();
        error REBALANCE_MULTI_POSITIONS_DIFFERENT_CHAIN();
        error REBALANCE_MULTI_POSITIONS_DIFFERENT_TOKEN();
        error REBALANCE_MULTI_POSITIONS_UNEXPECTED_RECEIVER_ADDRESS();
        error REBALANCE_SINGLE_POSITIONS_DIFFERENT_AMOUNT();
        error REBALANCE_SINGLE_POSITIONS_DIFFERENT_CHAIN();
        error REBALANCE_SINGLE_POSITIONS_DIFFERENT_TOKEN();
        error REBALANCE_SINGLE_POSITIONS_UNEXPECTED_RECEIVER_ADDRESS();
        error REBALANCE_XCHAIN_INVALID_RECEIVER_ADDRESS();
        error SafeERC20FailedOperation(address token);
        error VAULT_IMPLEMENTATION_FAILED();
        error ZERO_ADDRESS();
        error ZERO_AMOUNT();
    }

    /// Completes cross-chain rebalances started by the router plus.
    #[sol(rpc)]
    interface ISuperformRouterPlusAsync {
        function CHAIN_ID() external view returns (uint64);
        function completeCrossChainRebalance(CompleteCrossChainRebalanceArgs args_) external payable returns (bool rebalanceSuccessful);
        function decodeXChainRebalanceCallData(address receiverAddressSP_, uint256 routerPlusPayloadId_) external view returns (DecodedRouterPlusRebalanceCallData D);
        function disputeRefund(uint256 routerPlusPayloadId_) external;
        function finalizeRefund(uint256 routerPlusPayloadId_) external;
        function onERC1155BatchReceived(address, address, uint256[], uint256[], bytes) external pure returns (bytes4);
        function onERC1155Received(address, address, uint256, uint256, bytes) external pure returns (bytes4);
        function processedRebalancePayload(uint256 routerPlusPayloadId) external view returns (bool processed);
        function proposeRefund(uint256 routerPlusPayloadId_, uint256 refundAmount_) external;
        function refunds(uint256 routerPlusPayloadId) external view returns (address receiver, address interimToken, uint256 amount, uint256 proposedTime);
        function setXChainRebalanceCallData(address receiverAddressSP_, uint256 routerPlusPayloadId_, XChainRebalanceData data_) external;
        function superRegistry() external view returns (address);
        function supportsInterface(bytes4 interfaceId) external pure returns (bool);
        function whitelistedSelectors(uint8, bytes4 selector) external view returns (bool whitelisted);
        function xChainRebalanceCallData(address receiverAddressSP, uint256 routerPlusPayloadId) external view returns (bytes4 rebalanceSelector, address interimAsset, uint256 slippage, uint256 expectedAmountInterimAsset, bytes rebalanceToAmbIds, bytes rebalanceToDstChainIds, bytes rebalanceToSfData);

        event NewRefundAmountProposed(uint256 indexed routerPlusPayloadId, uint256 indexed newRefundAmount);
        event RefundCompleted(uint256 indexed routerPlusPayloadId, address indexed caller);
        event RefundDisputed(uint256 indexed routerPlusPayloadId, address indexed disputer);
        event RefundInitiated(uint256 indexed routerPlusPayloadId, address indexed refundReceiver, address refundToken, uint256 refundAmount);
        event XChainRebalanceComplete(address indexed receiver, uint256 indexed routerPlusPayloadId);

        error ALREADY_SET();
        error ARRAY_LENGTH_MISMATCH();
        error AddressEmptyCode(address target);
        error AddressInsufficientBalance(address account);
        error BLOCK_CHAIN_ID_OUT_OF_BOUNDS();
        error COMPLETE_REBALANCE_AMOUNT_OUT_OF_SLIPPAGE(uint256 newAmount, uint256 expectedAmount, uint256 userSlippage);
        error COMPLETE_REBALANCE_DIFFERENT_BRIDGE_ID();
        error COMPLETE_REBALANCE_DIFFERENT_CHAIN();
        error COMPLETE_REBALANCE_DIFFERENT_RECEIVER();
        error COMPLETE_REBALANCE_DIFFERENT_TOKEN();
        error COMPLETE_REBALANCE_INVALID_TX_DATA_UPDATE();
        error COMPLETE_REBALANCE_OUTPUTAMOUNT_OUT_OF_SLIPPAGE(uint256 newOutputAmount, uint256 expectedOutputAmount, uint256 userSlippage);
        error DELAY_NOT_SET();
        error DISPUTE_TIME_ELAPSED();
        error FailedInnerCall();
        error INSUFFICIENT_BALANCE();
        error INVALID_PROPOSER();
        error INVALID_REBALANCE_SELECTOR();
        error INVALID_REFUND_DATA();
        error IN_DISPUTE_PHASE();
        error NOT_ROUTER_PLUS();
        error NOT_ROUTER_PLUS_PROCESSOR();
        error NOT_VALID_DISPUTER();
        error REBALANCE_ALREADY_PROCESSED();
        error REFUND_ALREADY_PROPOSED();
        error SafeERC20FailedOperation(address token);
        error ZERO_ADDRESS();
    }

    /// Lets vault owners claim a protocol identifier.
    #[sol(rpc)]
    interface IVaultClaimer {
        function claimProtocolOwnership(string protocolId_) external;

        event Claimed(address indexed claimer, string protocolId);
    }

    /// The two ERC-20 calls needed before a router deposit.
    #[sol(rpc)]
    interface IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}
