//! Default medal emote table.
//!
//! Seeded into the `MEDAL_EMOTES` setting the first time the bot starts against an
//! empty database. Each medal is drawn from three custom emoji uploaded to the
//! campaign's Discord server.

use crate::model::settings::MedalEmotes;

const DEFAULT_MEDAL_EMOTES: [(&str, [&str; 3]); 25] = [
    ("BSCAMP", ["<:BSCAMP_L:1302768234973364256>", "<:BSCAMP_C:1302768235615354922>", "<:BSCAMP_R:1302768235908829195>"]),
    ("FCM", ["<:FCM_L:1302768237007732869>", "<:FCM_C:1302768237616037908>", "<:FCM_R:1302768238198784080>"]),
    ("HCAMPLS", ["<:HCAMPLS_L:1302768238819541045>", "<:HCAMPLS_C:1302768239658537112>", "<:HCAMPLS_R:1302768240702787614>"]),
    ("GFCM", ["<:GFCM_L:1302768241319612508>", "<:GFCM_C:1302768242284302397>", "<:GFCM_R:1302768242749739019>"]),
    ("HoA", ["<:HoA_L:1302768244112752680>", "<:HoA_C:1302768244805079140>", "<:HoA_R:1302768245954318437>"]),
    ("ACM", ["<:ACM_L:1302768246583459880>", "<:ACM_C:1302768247178924043>", "<:ACM_R:1302768248143609896>"]),
    ("GFAM", ["<:GFAM_L:1302768249032937532>", "<:GFAM_C:1302768249837977610>", "<:GFAM_R:1302768250513391626>"]),
    ("SCM", ["<:SCM_L:1302768250911985666>", "<:SCM_C:1302768251905904682>", "<:SCM_R:1302768252195180606>"]),
    ("HCAMPGT", ["<:HCAMPGT_L:1302768253545746493>", "<:HCAMPGT_C:1302768254011572315>", "<:HCAMPGT_R:1302768255202492426>"]),
    ("CDM", ["<:CDM_L:1302768255710134347>", "<:CDM_C:1302768256649531562>", "<:CDM_R:1302768257002111027>"]),
    ("BSCAMPS", ["<:BSCAMPS_L:1302768258029719714>", "<:BSCAMPS_C:1302768259409645598>", "<:BSCAMPS_R:1302768260437250058>"]),
    ("BSCAMPE", ["<:BSCAMPE_L:1302768261162733689>", "<:BSCAMPE_C:1302768261850726442>", "<:BSCAMPE_R:1302768263050301592>"]),
    ("BSCAMPH", ["<:BSCAMPH_L:1302768263960199188>", "<:BSCAMPH_C:1302768264828424282>", "<:BSCAMPH_R:1302768265549975612>"]),
    ("BSCAMPSR", ["<:BSCAMPSR_L:1302768266829365369>", "<:BSCAMPSR_C:1302768267534008351>", "<:BSCAMPSR_R:1302768268628594738>"]),
    ("AOH", ["<:AOH_L:1302768269111070753>", "<:AOH_C:1302768270125957221>", "<:AOH_R:1302768270587199569>"]),
    ("SC", ["<:SC_L:1302768271669461052>", "<:SC_C:1302768272432959558>", "<:SC_R:1302768272915173457>"]),
    ("HCAMPRT", ["<:HCAMPRT_L:1302768273422553119>", "<:HCAMPRT_C:1302768274882170986>", "<:HCAMPRT_R:1302768276056838205>"]),
    ("AAM", ["<:AAM_L:1302768277252210688>", "<:AAM_C:1302768277830893580>", "<:AAM_R:1302768278862561342>"]),
    ("BSCAMPDS", ["<:BSCAMPDS_L:1302768279667998750>", "<:BSCAMPDS_C:1302768280506732574>", "<:BSCAMPDS_R:1302768281500909609>"]),
    ("PLM", ["<:PLM_L:1302768283258454106>", "<:PLM_C:1302768284608761968>", "<:PLM_R:1302768285808463972>"]),
    ("ASM", ["<:ASM_L:1302768286643126434>", "<:ASM_C:1302768288006279259>", "<:ASM_R:1302768289218301962>"]),
    ("BSCAMPII", ["<:BSCAMPII_L:1302768290170536036>", "<:BSCAMPII_C:1302768290925514783>", "<:BSCAMPII_R:1302768291575758909>"]),
    ("HCAMP", ["<:HCAMP_L:1302768292468887696>", "<:HCAMP_C:1302768293274456174>", "<:HCAMP_R:1302768293987352628>"]),
    ("FAM", ["<:FAM_L:1302768294574559293>", "<:FAM_C:1302768295203831900>", "<:FAM_R:1302768296340357180>"]),
    ("BSCAMPHT", ["<:BSCAMPHT_L:1302768297011576975>", "<:BSCAMPHT_C:1302768298123071581>", "<:BSCAMPHT_R:1302768299137962014>"]),
];

/// Builds the medal emote table the campaign ships with.
pub fn default_medal_emotes() -> MedalEmotes {
    DEFAULT_MEDAL_EMOTES
        .into_iter()
        .map(|(name, parts)| (name.to_string(), parts.map(str::to_string)))
        .collect()
}
