//! Fixed test keys and vectors shared by the integration tests, benches and demos.

#![allow(dead_code)]

use hex_literal::hex;
use rsa_primitives::{CrtComponents, RsaPrivateKey, RsaPublicKey};

// 2048-bit key.

pub const N_2048: [u8; 256] = hex!(
    "a77835e7981e2cbd2c91614910b21c3e650d1e081621c20a3a2851bdf5b338ae"
    "18dd05dd9b7651249acc23c50ea04a93a2f14602114d95725392fde6ebc69a77"
    "6ccda758895d26418954f8f8fe331818948fde2f0ddb9143516f0c7dc9d5b956"
    "8f14d7041799755381559e16a586f512f2fb50bce1acd60bcf831ef0ac3c2485"
    "54880340874d06fc97680bc1ffb0df4de746a84688b733279dfb301f2503074f"
    "c9fce2cd56233773902cf58919a789825e84934c476b394e162b7adfb4bda149"
    "4d4748071a75f02b95cfd6202e0b2d29943a62d8ce50433dc117a5ebb7361cc1"
    "3cc9322f51c5f675e705d7000b7dfc5f833cc53c65de182df145697eec7d0e01"
);

pub const E_2048: [u8; 3] = hex!(
    "010001"
);

pub const D_2048: [u8; 256] = hex!(
    "0253f273e0b272aec282d6d65c2c0da67463254ab97c08a579bf7bbb6741f184"
    "c205b882271a12f0ae522e211c1df04b73156582bbd8d73dfa996d7c1b44ec7a"
    "c2816d5516bbbbbf67784de9b026e7abd7ccd42ad5477b12737c56b11cf0229e"
    "6868c2c064cf9648ede051cd40c9ca7853f6585df7c91e4495c2ddd83c9cad69"
    "433131bc55db21cc6afa593560d7675c2364f44579d57d5de2194ac3d47d171f"
    "75879be7154ebfb7621330637a8209c2c638cb9784afb15679f56a6aee20e2b3"
    "110081a18d2ad39c64cdafc8a43b602bc2933f5ba45dbb5d93d76e65dcb8c4e7"
    "01b5b34d2d0e51e46ca2918b760c436a033744215e4d060b025a3604f8ea5901"
);

pub const P_2048: [u8; 128] = hex!(
    "aa9d3b7b3ca7bf43cae647cf1d73d614ef06fda13ba9582734b344569207c29f"
    "36c23feb70136e0ede2ba0df19dcf0316523b4c82f8e24bad69e9e87816113af"
    "d9bd278ea3dbb31598c6baf50c68875513d382c029c51fad88410befc5bd9a7a"
    "e6046a8f37d9f1c2e98ceac88381bb8c32db09b3d674d0b96a5eab3152d472b1"
);

pub const Q_2048: [u8; 128] = hex!(
    "fb48188d7c40c6957455e02064b03189206839d702989e32dcba0ca099779577"
    "58c286065ef16e4f1dc09174a2e9b727f3991f9f45e3d15dc5e73d7a0ca24abb"
    "899410b7bf471f3ca6be3146aa7b7964733138a539a798a854a7e2f6d9f83168"
    "2b4b615f5e59588311fcf2640b934e847445d0b63e5ec8fdd465efb5979a0451"
);

pub const DP_2048: [u8; 128] = hex!(
    "4ef6ce9ccf09e45ffffc6ca7d33dd58b82c57d85ae1346957eb2a9a2579bf7db"
    "b0805f0d1ca6217e081db12b10d14ce9cfa1a2fe33e459e38f89825dbce7ad30"
    "ea59bd812b1d77d93b085f6723030dffb659625e85f6921ec2bd384515041807"
    "618611bb8f61f39efe7116090fb46f9507c490cd0728b1a1df35498e5e83ad41"
);

pub const DQ_2048: [u8; 128] = hex!(
    "9a14b949789957aba92c474455b95c86932295e4eba89dc8de640efe235c9a80"
    "1623217fa2943469bafaabb67377106225130dbae26631a96882c4c5a41d97e9"
    "ab10e9b76248c034b6a2052129c490c931814b14b567b949eeaf0b930651142a"
    "a5f19101a39ef1915d645755556bbc47a7ec6f70708a3a80bacececff0e7f621"
);

pub const QINV_2048: [u8; 128] = hex!(
    "13ceffd3939d01c7f5a7e924dbb232a045657c9ba8794073296fd07944eeba08"
    "77531c0807503e7078b79f80ba4f67e4593f41eb5861fc31fb40c49a2a71e98e"
    "61f584ee728f7ceca139af13b9a423a6fcba34e7d738d8aabbadb5ccc3bf005f"
    "b72047648c5f6508f7b42fa1ca7a664749a41fdfd081ce97488a3a2b1a530835"
);

/// Message representative. Its leading byte is zero.
pub const EM_2048: [u8; 256] = hex!(
    "00aab752f8107b24183ff0aef7e2c0a545093a2cd75e2baed92c98896d1c61f0"
    "1408b7fdede01e9129a05299c95b02dfe5fe04ba280e3199fc79585fe2ed0485"
    "4d311b96464c015dafcfd3836222d8bd97d2cbae820951dd66785e65b8edfaea"
    "d638056c2a2abc3f396c76d2cfa059e96cfeb3bccd49f0630b1620d051a93e0e"
    "2340d4421fd7e39145a52a482d1d647c0abcf241ea643aeada28301d11489381"
    "7d7966868ca5e256d2d12fe4bfe3c148f2dcf54754ab0ec204222bef3a80443d"
    "99524760a7e19ccfbda53a532165d65855a67c48251ee703504b1cfdf8a7812f"
    "0fd6c707575de96e919ba20c3657e44999cd39cc09b21895700fe418dde77d1a"
);

/// `EM_2048^e mod n`.
pub const C_2048: [u8; 256] = hex!(
    "8a5aad9bef645e1332477b53ada3cbcc69d1c3f24a459943daf86c4c58b273e6"
    "ab158d79f4339d0039efdf9d53fa707a1a743a9cbae262b67ce7548a4bbe3be4"
    "2a39494857299d0b097293ba2311eb39253a67015bba355992c1dee24dd74bc7"
    "0373b8cc3842e9f5b8ce8e17e843de171210a2554e6086293e1606c3716d3da5"
    "7510ce6854fbe2ffdfba5eb0e35427427d0e36747a77bb977dd648d0429f3f2f"
    "4a10c6ef930b4630663b2a21be28244e88e065c04caf2e396de50a7dcbf1d47b"
    "f7d3e6abb7d5187d4b1a05f8da91946f5eeeee69e66707cdb836aec561736003"
    "af0c218f855039735ad3ec740a2b2246577f0712db230632115dd73941c1a2bd"
);

/// `EM_2048^d mod n`. Signing `EM_2048` through the CRT hits a negative `m1 - m2`.
pub const S_2048: [u8; 256] = hex!(
    "8dcae07733dfcbdfb5b617b14203ec821208f32146185ade26a8e3da5eca1bce"
    "3d9d30301ce5bea698f6c8a5b113bd5989776fed7d3d179336d38acf014eb9ea"
    "1c1d89066b7025d312b0f1841400049567c7058bd5126a249e57016cd31c5762"
    "18fd650bd83f08983aa80dc0370302afe656a6c241ec8f95a1eeba8edb5ac71c"
    "ef153309e88150aeee7ca90b74dd9e7693f2ff2b0dcff001852077c62169615a"
    "1279e0bb980a7ef6f61147c32258f05bd11a498e4ffec4845fb7934f4667b688"
    "63c763c17cde11e6d25efb2037ed59741a6b1c0cb2e7ef40796c3c8c3ad6ca49"
    "b0ade63092cdca0073f83bdb3736ce08864368cccc45ca96e9cf53f4f316db9c"
);

// 1024-bit key.

pub const N_1024: [u8; 128] = hex!(
    "eb40a4ab9289ba3445a468df299113538d056ad6042b118b6aca0c7471cd0567"
    "9affe121b4b561b16ce730cb23be217d751f1282b495f6bc9214f89ff0ace1be"
    "7d7105d17bb21d03879636480da6f514f60f76cd81b7d176e09d3144218dce7f"
    "3ec22d4959d37bf69e917bf309e93b568d47239d6a1f8c21291450c47bab32c1"
);

pub const D_1024: [u8; 128] = hex!(
    "d707543cdb0976a096d36b6427bb4a5e0135656ccf8c8a51d3bf70d8f2b8026b"
    "abda9cee511dc5790660df519e8f084f83416e8af80366eeffdb9951a00c759d"
    "0693da8251c697cfe561748318bf7097695ffae1207f5bdd5feba0ba4b098db9"
    "46b018dd2456df8778171d8df7ec18dd629a565e745bfba3789bdac44989d32d"
);

pub const P_1024: [u8; 64] = hex!(
    "fa9dc75f246451a2f17e2685ff146e920d5a8fc28cca0f6120162919272fe73f"
    "8030ab4e2353e1ecbdf689f40439c03ca7db0fca9fbf53c779976a382dbcf823"
);

pub const Q_1024: [u8; 64] = hex!(
    "f04e5fb2d7449746aa8f0341665a84ce8d2b54ac20f742d2c3c21eaf89699f5a"
    "f94fb59bfe13094ee6c95ffc1e5055bb1f951bb00b1257bf11049e8316db45cb"
);

pub const DP_1024: [u8; 64] = hex!(
    "f1609f92ba4948fb885e791a1be900e9f8a49dcbc2b02689e44e93bcdf2a5b2e"
    "a4f7bb3661fe3b9e3a04473058158b5aa04cf3f3b352a28d8045de8f47363743"
);

pub const DQ_1024: [u8; 64] = hex!(
    "068e5cd608417acf16c0281a94ac4b8b4716b38caea9904d27c2180c39f783bd"
    "7ba7cd10a071ec831690cfe994fa241ca2d3f2996ef3e528f551e6f134a26ed9"
);

pub const QINV_1024: [u8; 64] = hex!(
    "9ca3e2ef454ddadf1d9171535f0023ab436117ebb9176f9ade054c0f90935a0f"
    "dacfda866ba858f894475d971a6895a97ab53e2e625cd40734559ca951b0f326"
);

pub const E_1024: [u8; 3] = hex!(
    "010001"
);

pub const M_1024: [u8; 128] = hex!(
    "0001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffffffffff00000102030405060708090a0b0c0d0e0f101112131415161718"
);

pub const C_1024: [u8; 128] = hex!(
    "57b774351ac3e9d435c529fad7c7ffcf10692aaef852c0dd3d48551be033bde8"
    "f43cb1273aecc534ec9c0d2bcb97dc1dee1871e55cc628bc12a80504bb85555d"
    "72e205003b6c77715c59678e950609d1881abce1277f34369cdc5f0e7b69e592"
    "587aca86a597bec3117005865bd884ab7358e5f633031c6f03a297d28e7e114f"
);

pub const S_1024: [u8; 128] = hex!(
    "5b6787a28143269172c70d57fe2e64d9fd075c36e4e8646c8c513cd086919938"
    "84b18095339e0fc0ffb3136edd0701aaecbe69dc9ee44e9c881ea9e2874cc10d"
    "605e5e0e3c5a21e32dea37df4d95abdd2a2be647b9a9ad8b305e2983469f617f"
    "3642ab127f019289a806b8ab79f6ad4f156005cbe2d2052f0e6d726d39a4c90d"
);

pub fn public_key_2048() -> RsaPublicKey {
    RsaPublicKey::new(N_2048.to_vec(), E_2048.to_vec())
}

pub fn private_key_2048() -> RsaPrivateKey {
    RsaPrivateKey::from_components(
        N_2048.to_vec(),
        D_2048.to_vec(),
        Some(CrtComponents::new(
            P_2048.to_vec(),
            Q_2048.to_vec(),
            DP_2048.to_vec(),
            DQ_2048.to_vec(),
            QINV_2048.to_vec(),
        )),
    )
}

pub fn public_key_1024() -> RsaPublicKey {
    RsaPublicKey::new(N_1024.to_vec(), E_1024.to_vec())
}

pub fn private_key_1024() -> RsaPrivateKey {
    RsaPrivateKey::from_components(
        N_1024.to_vec(),
        D_1024.to_vec(),
        Some(CrtComponents::new(
            P_1024.to_vec(),
            Q_1024.to_vec(),
            DP_1024.to_vec(),
            DQ_1024.to_vec(),
            QINV_1024.to_vec(),
        )),
    )
}
