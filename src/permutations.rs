//! Static MinHash permutation table.
//!
//! Table version 1. Each pair `(MPA[i], MPB[i])` parameterizes the universal hash
//! `((a * x + b) mod 2^64) mod (2^61 - 1)`. `MPA` values lie in `[1, 2^61 - 1)`,
//! `MPB` values in `[0, 2^61 - 1)`. Changing any value changes every Content-ID and
//! Data-ID, so the table is data, never derived at runtime.
//!
//! This is not the canonical ISCC table. Content-IDs and Data-IDs are only
//! comparable with codes produced from this same table, not with other ISCC
//! implementations.

use crate::minhash::MINHASH_PERMUTATIONS;

#[rustfmt::skip]
pub(crate) const MPA: [u64; MINHASH_PERMUTATIONS] = [
    0x18a3d0fa522325e7, 0x0f8b694b2d41ea29, 0x0d8cce208ffa6ca5,
    0x0000f5307be5175f, 0x0f926890a21a1cf3, 0x11b592e0954b5c43,
    0x0b4e09d83c2f59af, 0x089aa21a3e422dbf, 0x180c38370937a9ca,
    0x0d0341986c23b45a, 0x0b794fb560b24e6e, 0x16fd477cb050a23b,
    0x1ad064cdc64d8e4d, 0x0081b45984f761a5, 0x1357ac93e669e331,
    0x092c5f32811b1e01, 0x0652efe855cf8a51, 0x0e28c75b18fa3725,
    0x075e704b0f039f82, 0x0dd2cde9849e2677, 0x0e3adea0d57d4c79,
    0x189907f92b0b0d7c, 0x1d8eabb4f3199c7c, 0x1f53185d94112818,
    0x11f3154a64bd719c, 0x147101c67f1ca338, 0x18e46b253c317be5,
    0x17b891c468c4db30, 0x10a52999adbeb8dc, 0x08bd46d3eb45487c,
    0x0460739c5d7f9013, 0x089d36cadf248a77, 0x1fc8d551cef461a3,
    0x1d7d9fb938f56aa7, 0x1f34a37bec744380, 0x00eef0797b4ed19f,
    0x0c601ccd8a0f82e4, 0x11af5f70fcb05202, 0x012b103c8108e240,
    0x197b05c797e25bbc, 0x0477c4ecc15a17f9, 0x18294aa52b1d1b31,
    0x1eea386e4e0123fc, 0x0a4cfe6ac56a4d6a, 0x0f65bdf4376e9409,
    0x13e3393022da61db, 0x13ceeb15eecfc394, 0x1a7625e0b40794c2,
    0x0b87fbb7f3613e67, 0x105cf56f00be585e, 0x042da124d002b32b,
    0x0ce04b7cf71af69c, 0x11adc803d79e861b, 0x1f2596a53f418add,
    0x0d7256e1c07ebb2d, 0x16e746ddcdff76f6, 0x0ef4810cfd16757b,
    0x144303584fbd01ce, 0x1f2ea3766cae1161, 0x1c2a9fe20520aa0a,
    0x1141ab43614743e0, 0x02c7cc41e8e15c25, 0x01c2aa3905fdbce8,
    0x10a5413074a2e49c, 0x09fee98e96d1652b, 0x1ad3fb80908f4083,
    0x1ad3f53927b7f800, 0x10ee77488b08f6dc, 0x0246454ef4ec1ec8,
    0x0b35f2a832bb93e1, 0x08af43674a2921f8, 0x1cc01196e06215ea,
    0x1c536d414923142b, 0x0cfd7e6ae86e0ba9, 0x0e352a6acbbe1af8,
    0x1b8a60bea8d77b2e, 0x0ebbd04d4b98baf8, 0x0adb6e0dcaa4d6bd,
    0x0d0d79a35683d96e, 0x1e8869908ed16220, 0x06646870240c3056,
    0x1465bf4223346e19, 0x0f727af7f24a8906, 0x0911e9e23478c776,
    0x0c7a3355e9e6656c, 0x11621fd14e3bc5d2, 0x170d39da6d75b929,
    0x1fc8164a904e6342, 0x0c0f41704987a065, 0x03281f2728201743,
    0x08bdb3ede6d448d2, 0x0126bf13a5039e09, 0x1b4b4a1d22756088,
    0x0425ce947a7845a5, 0x052fb46705b6be05, 0x03598a1ddebf94b2,
    0x05c77ec06e197bac, 0x08c3004a2e0a2a5a, 0x0ea5bbdd1baae09d,
    0x0bbed9cad217a809, 0x1eb947229088e265, 0x1b89772dbe1e229b,
    0x1ed36178a2781a82, 0x0da4320d3669c841, 0x0c2785340efcfe12,
    0x1adb5f5885fe8580, 0x143c4afb1463f795, 0x0bfd4029170e37b6,
    0x1b9ca96e410d97db, 0x1d65d1bd2772daf8, 0x13e99bb5a22a1e2a,
    0x1e415ca67d866877, 0x017dfd7ae730e3fe, 0x19c47471bb3540a7,
    0x150e2db09742ba23, 0x0abefa3ab52d4b17, 0x1af1afb20b645106,
    0x0a8568e2bbc12111, 0x05d3edd9c2f22e1e, 0x0ec211256e00c0d9,
    0x0d3b84a846661dfb, 0x03888fd3ec547af0, 0x060a75fc71e47b07,
    0x0964cc2e9ffc1fd4, 0x1f69110eed23ee40, 0x15604367effe7f19,
    0x0f5666aebb59bd29, 0x0ad5147928c351ec,
];

#[rustfmt::skip]
pub(crate) const MPB: [u64; MINHASH_PERMUTATIONS] = [
    0x08c94bca2f3cf415, 0x01b8962a9037e6a0, 0x166e7b3d415396f5,
    0x0420379c11c4e765, 0x1ee6550335c3517d, 0x1a5426d2d2849a95,
    0x0e5e117653872d22, 0x0723c9065fc3b0db, 0x060edfca3a04cd15,
    0x03f98849d053588b, 0x05a1e515aa962522, 0x17896e8c4d514468,
    0x1cc40a8105958116, 0x0fd65cf64493f0dd, 0x0d0c12b16fb17cd0,
    0x130b814fe9b1a3d3, 0x05af6a345174d294, 0x1427a5d17c38ec17,
    0x0adacfb963363425, 0x1ecba3f553885793, 0x08fe1c641c4e3e94,
    0x1a1d588c39e50654, 0x1df501ff763138e4, 0x1ce21c961392ddc6,
    0x1802b6650c8c9b4a, 0x03f027bcb74f4edb, 0x0a09d4d450b7123d,
    0x1244bca4a67a79f7, 0x062dc529345d80c9, 0x021c7c290fd3ec46,
    0x1cb66e65ab94d578, 0x1d40749bfcb2c138, 0x1ff1138e6f04acda,
    0x0798631eb26f4acd, 0x1e959c9be0173db2, 0x0ad291f865f629a2,
    0x0221e76a8213ae5a, 0x015efb22e99ccba2, 0x0ab5497b8ac53ec7,
    0x1f5bee829c74a2cf, 0x09c86cfd7cb183d4, 0x1272dd0f0e5696ec,
    0x1118d13737e83ebd, 0x03339bd0cbeb21e2, 0x0730262be99195a2,
    0x07dfe804ca1ad1df, 0x0ba94ae2cf558ec2, 0x01f4d9b67b61b24e,
    0x039d06e8dbc2358d, 0x144fb1a587b84c07, 0x032d2271cbfb4339,
    0x19dd72ca5982261a, 0x1dc743104b7a220b, 0x007338b94314ec5a,
    0x0cd07a014e3acf8f, 0x15c47ef61457e0f6, 0x0c4795be6e87d3ae,
    0x0d610c051490011b, 0x0a8da3deef93fe27, 0x07f141e9570f8b12,
    0x02ec2c20a8b533b1, 0x12fe0be746d7eb9a, 0x19bbfd666a75b351,
    0x09e67fbae922af9b, 0x0a9ebf7d8eb38357, 0x1698fbc7ffb6781e,
    0x1d59f2487717fa66, 0x1ec8a8c856fd6859, 0x0c1f497a99d1d6fc,
    0x1c074e9f0d06e092, 0x0386cd8d3712ce0f, 0x13e9e2bc2ed786aa,
    0x0772b59b73488ae9, 0x0aac5da7b542622f, 0x10eeb2e35d987708,
    0x187dc51fd79268d8, 0x1ab9e6d0b4cbb7ef, 0x08a27ee5d5995148,
    0x1ba5ceb925c37fe3, 0x1779b4b754a6ec51, 0x11c02bc09ac96d4e,
    0x14af593c248a403b, 0x1102366b8d4d0954, 0x0225fa117768d594,
    0x055e74fbc24b77b5, 0x15acde53e80c066c, 0x1e546270bcbc8402,
    0x14f39b21cd026d08, 0x016259c22689db5e, 0x0217058226a20d0a,
    0x0e8811a64b19fd1d, 0x1c17fb135efb8f10, 0x04be893a345db1ef,
    0x116ca3eaf1ee1d6b, 0x0dfeea9084d73e72, 0x096fb0e2a7a59fa4,
    0x026734085ed9fcd8, 0x0acced9c53d67711, 0x1ee19fb9bbb2fde5,
    0x0f7cab62ba457c07, 0x1538d36ecc83807d, 0x1b58a228dbaafaac,
    0x0d4dad58fee0ce12, 0x1f8ff48d00a28f8d, 0x0cb6757c9afffd0d,
    0x1224fe04bd15d10d, 0x06dc4c1fecd21048, 0x09611604b6cafd2d,
    0x170b23125238a036, 0x124de5f143b2cda0, 0x115b1a8118e95001,
    0x163e1f1037919cdb, 0x0d1cdeb73399a6d4, 0x0fa364cc5bf00518,
    0x0d56da34c698386e, 0x034ea46455da0e52, 0x0072c05606aef1ad,
    0x09823b2e282b0bd4, 0x1509994a8b15e847, 0x0df46ab8fb335249,
    0x15beaedc6fece37e, 0x118883dc89f88a99, 0x1d79eaeac0c24593,
    0x0ffa2d63cbafd617, 0x15e9e1cbba8ccd15, 0x1778d3d5c6d456a3,
    0x1a90c2f3632768e2, 0x04494ff771208f5a,
];
